use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // customers 表
        manager
            .create_table(
                Table::create()
                    .table(Customer::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Customer::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Customer::Name).string().not_null())
                    .col(ColumnDef::new(Customer::Company).string().not_null().default(""))
                    .col(ColumnDef::new(Customer::Email).string().not_null().default(""))
                    .col(ColumnDef::new(Customer::Phone).string().not_null().default(""))
                    .col(ColumnDef::new(Customer::Notes).string().not_null().default(""))
                    .col(
                        ColumnDef::new(Customer::Status)
                            .string()
                            .not_null()
                            .default("Active"),
                    )
                    .col(ColumnDef::new(Customer::CreatedAt).string().not_null())
                    .to_owned(),
            )
            .await?;

        // domains 表
        manager
            .create_table(
                Table::create()
                    .table(Domain::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Domain::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Domain::DomainName).string().not_null())
                    .col(ColumnDef::new(Domain::Registrar).string().not_null().default(""))
                    .col(ColumnDef::new(Domain::PurchaseDate).string().not_null().default(""))
                    .col(ColumnDef::new(Domain::ExpiryDate).string().not_null())
                    .col(
                        ColumnDef::new(Domain::Nameservers)
                            .string()
                            .not_null()
                            .default("[]"),
                    )
                    .col(ColumnDef::new(Domain::ARecord).string().null())
                    .col(ColumnDef::new(Domain::HostingId).string().null())
                    .col(ColumnDef::new(Domain::CustomerId).string().not_null().default(""))
                    .col(
                        ColumnDef::new(Domain::Status)
                            .string()
                            .not_null()
                            .default("Active"),
                    )
                    .col(
                        ColumnDef::new(Domain::IsAutoRenew)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Domain::CreatedAt).string().not_null())
                    .to_owned(),
            )
            .await?;

        // hosting_packages 表
        manager
            .create_table(
                Table::create()
                    .table(HostingPackage::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(HostingPackage::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(HostingPackage::Name).string().not_null())
                    .col(ColumnDef::new(HostingPackage::Type).string().not_null())
                    .col(ColumnDef::new(HostingPackage::VpsId).string().null())
                    .col(ColumnDef::new(HostingPackage::ControlPanel).string().not_null())
                    .col(ColumnDef::new(HostingPackage::CustomerId).string().null())
                    .col(
                        ColumnDef::new(HostingPackage::PrimaryDomain)
                            .string()
                            .not_null()
                            .default(""),
                    )
                    .col(ColumnDef::new(HostingPackage::IpAddress).string().null())
                    .col(ColumnDef::new(HostingPackage::ExpiryDate).string().not_null())
                    .col(ColumnDef::new(HostingPackage::CreatedAt).string().not_null())
                    .to_owned(),
            )
            .await?;

        // vps 表
        manager
            .create_table(
                Table::create()
                    .table(Vps::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Vps::Id).string().not_null().primary_key())
                    .col(ColumnDef::new(Vps::Name).string().not_null())
                    .col(ColumnDef::new(Vps::Provider).string().not_null().default(""))
                    .col(ColumnDef::new(Vps::IpAddress).string().not_null())
                    .col(ColumnDef::new(Vps::Os).string().not_null().default(""))
                    .col(ColumnDef::new(Vps::Cpu).string().not_null().default(""))
                    .col(ColumnDef::new(Vps::Ram).string().not_null().default(""))
                    .col(ColumnDef::new(Vps::Disk).string().not_null().default(""))
                    .col(ColumnDef::new(Vps::ExpiryDate).string().not_null())
                    .col(
                        ColumnDef::new(Vps::Status)
                            .string()
                            .not_null()
                            .default("Online"),
                    )
                    .col(ColumnDef::new(Vps::CustomerId).string().null())
                    .col(ColumnDef::new(Vps::CreatedAt).string().not_null())
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Vps::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(HostingPackage::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Domain::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Customer::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Customer {
    #[sea_orm(iden = "customers")]
    Table,
    Id,
    Name,
    Company,
    Email,
    Phone,
    Notes,
    Status,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Domain {
    #[sea_orm(iden = "domains")]
    Table,
    Id,
    DomainName,
    Registrar,
    PurchaseDate,
    ExpiryDate,
    Nameservers,
    ARecord,
    HostingId,
    CustomerId,
    Status,
    IsAutoRenew,
    CreatedAt,
}

#[derive(DeriveIden)]
enum HostingPackage {
    #[sea_orm(iden = "hosting_packages")]
    Table,
    Id,
    Name,
    Type,
    VpsId,
    ControlPanel,
    CustomerId,
    PrimaryDomain,
    IpAddress,
    ExpiryDate,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Vps {
    #[sea_orm(iden = "vps")]
    Table,
    Id,
    Name,
    Provider,
    IpAddress,
    Os,
    Cpu,
    Ram,
    Disk,
    ExpiryDate,
    Status,
    CustomerId,
    CreatedAt,
}
