//! Common behaviour of the four entity types

use crate::error::CoreResult;
use crate::types::{
    CreateCustomerRequest, CreateDomainRequest, CreateHostingRequest, CreateVpsRequest, Customer,
    CustomerRecord, Domain, DomainRecord, EntityKind, HostingPackage, HostingRecord, Vps,
    VpsRecord,
};

/// An entity stored by the persistence collaborator.
///
/// `Request` is the entity without its identifier (what the user submits on create);
/// `Record` is the snake_case storage row.
pub trait Entity: Clone + Send + Sync + 'static {
    type Request: Clone + Send + Sync + 'static;
    type Record: Clone + Send + Sync + 'static;

    const KIND: EntityKind;

    fn id(&self) -> &str;

    fn from_request(id: String, request: Self::Request) -> Self;

    fn to_request(&self) -> Self::Request;

    /// Checks required fields before anything is sent to storage.
    fn validate_request(request: &Self::Request) -> CoreResult<()>;

    fn to_record(&self) -> Self::Record;

    fn from_record(record: Self::Record) -> CoreResult<Self>;
}

macro_rules! impl_entity {
    ($entity:ty, $request:ty, $record:ty, $kind:expr) => {
        impl Entity for $entity {
            type Request = $request;
            type Record = $record;

            const KIND: EntityKind = $kind;

            fn id(&self) -> &str {
                &self.id
            }

            fn from_request(id: String, request: Self::Request) -> Self {
                <$entity>::from_request(id, request)
            }

            fn to_request(&self) -> Self::Request {
                <$entity>::to_request(self)
            }

            fn validate_request(request: &Self::Request) -> CoreResult<()> {
                request.validate()
            }

            fn to_record(&self) -> Self::Record {
                <$record>::from(self)
            }

            fn from_record(record: Self::Record) -> CoreResult<Self> {
                <$entity>::try_from(record)
            }
        }
    };
}

impl_entity!(Customer, CreateCustomerRequest, CustomerRecord, EntityKind::Customer);
impl_entity!(Domain, CreateDomainRequest, DomainRecord, EntityKind::Domain);
impl_entity!(HostingPackage, CreateHostingRequest, HostingRecord, EntityKind::Hosting);
impl_entity!(Vps, CreateVpsRequest, VpsRecord, EntityKind::Vps);
