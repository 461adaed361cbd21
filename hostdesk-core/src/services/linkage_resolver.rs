//! Linkage Resolver
//!
//! Cross-references domains, hosting packages and servers. Identifiers are the
//! authoritative join key; `primary_domain` name matching is the fallback for
//! records without explicit links.
//!
//! All lookups go through indices built once in [`LinkageResolver::new`], so a
//! render pass that resolves every row stays linear in the collection sizes.

use std::collections::HashMap;

use crate::services::Collections;
use crate::types::{Domain, HostingNode, HostingPackage, InfrastructureTopology, Vps, VpsNode};

/// Read-only join indices over one snapshot of the collections
pub struct LinkageResolver<'a> {
    domains: &'a [Domain],
    hostings: &'a [HostingPackage],
    servers: &'a [Vps],
    hosting_by_id: HashMap<&'a str, &'a HostingPackage>,
    /// First package encountered wins for a duplicated `primary_domain`
    hosting_by_primary_domain: HashMap<&'a str, &'a HostingPackage>,
    vps_by_id: HashMap<&'a str, &'a Vps>,
    /// Built from packages with both a `primary_domain` and a resolvable `vps_id`;
    /// the last such package wins
    vps_by_primary_domain: HashMap<&'a str, &'a Vps>,
    hostings_by_vps_id: HashMap<&'a str, Vec<&'a HostingPackage>>,
    /// Domain positions keyed by `hosting_id`, `domain_name` and `a_record`
    domains_by_hosting_id: HashMap<&'a str, Vec<usize>>,
    domains_by_name: HashMap<&'a str, Vec<usize>>,
    domains_by_a_record: HashMap<&'a str, Vec<usize>>,
}

impl<'a> LinkageResolver<'a> {
    #[must_use]
    pub fn new(domains: &'a [Domain], hostings: &'a [HostingPackage], servers: &'a [Vps]) -> Self {
        let mut vps_by_id = HashMap::with_capacity(servers.len());
        for vps in servers {
            vps_by_id.entry(vps.id.as_str()).or_insert(vps);
        }

        let mut hosting_by_id = HashMap::with_capacity(hostings.len());
        let mut hosting_by_primary_domain = HashMap::new();
        let mut vps_by_primary_domain = HashMap::new();
        let mut hostings_by_vps_id: HashMap<&str, Vec<&HostingPackage>> = HashMap::new();

        for hosting in hostings {
            hosting_by_id.entry(hosting.id.as_str()).or_insert(hosting);

            let primary = hosting.primary_domain.as_str();
            if !primary.is_empty() {
                hosting_by_primary_domain.entry(primary).or_insert(hosting);
            }

            if let Some(vps_id) = reference(hosting.vps_id.as_deref()) {
                hostings_by_vps_id.entry(vps_id).or_default().push(hosting);

                if let Some(vps) = vps_by_id.get(vps_id) {
                    if !primary.is_empty() {
                        vps_by_primary_domain.insert(primary, *vps);
                    }
                }
            }
        }

        let mut domains_by_hosting_id: HashMap<&str, Vec<usize>> = HashMap::new();
        let mut domains_by_name: HashMap<&str, Vec<usize>> = HashMap::new();
        let mut domains_by_a_record: HashMap<&str, Vec<usize>> = HashMap::new();

        for (index, domain) in domains.iter().enumerate() {
            if let Some(hosting_id) = reference(domain.hosting_id.as_deref()) {
                domains_by_hosting_id.entry(hosting_id).or_default().push(index);
            }
            domains_by_name
                .entry(domain.domain_name.as_str())
                .or_default()
                .push(index);
            if let Some(ip) = domain.a_record.as_deref().filter(|ip| !ip.is_empty()) {
                domains_by_a_record.entry(ip).or_default().push(index);
            }
        }

        Self {
            domains,
            hostings,
            servers,
            hosting_by_id,
            hosting_by_primary_domain,
            vps_by_id,
            vps_by_primary_domain,
            hostings_by_vps_id,
            domains_by_hosting_id,
            domains_by_name,
            domains_by_a_record,
        }
    }

    #[must_use]
    pub fn from_collections(collections: &'a Collections) -> Self {
        Self::new(
            &collections.domains,
            &collections.hostings,
            &collections.vps,
        )
    }

    /// Hosting package of a domain.
    ///
    /// 1. `hosting_id`, when set and non-empty, is authoritative (a dangling ID
    ///    yields `None`)
    /// 2. otherwise the first package whose `primary_domain` equals `domain_name`
    #[must_use]
    pub fn resolve_hosting_for(&self, domain: &Domain) -> Option<&'a HostingPackage> {
        match reference(domain.hosting_id.as_deref()) {
            Some(hosting_id) => {
                let hosting = self.hosting_by_id.get(hosting_id).copied();
                if hosting.is_none() {
                    log::debug!(
                        "Domain {} references missing hosting package {hosting_id}",
                        domain.domain_name
                    );
                }
                hosting
            }
            None => self
                .hosting_by_primary_domain
                .get(domain.domain_name.as_str())
                .copied(),
        }
    }

    /// Server of a domain.
    ///
    /// 1. the resolved package's `vps_id`, if it exists in the VPS collection
    /// 2. otherwise the `primary_domain -> VPS` index
    #[must_use]
    pub fn resolve_vps_for(&self, domain: &Domain) -> Option<&'a Vps> {
        self.resolve_hosting_for(domain)
            .and_then(|hosting| self.vps_of(hosting))
            .or_else(|| {
                self.vps_by_primary_domain
                    .get(domain.domain_name.as_str())
                    .copied()
            })
    }

    /// Server a package resides on; `None` for unassigned or dangling `vps_id`.
    #[must_use]
    pub fn vps_of(&self, hosting: &HostingPackage) -> Option<&'a Vps> {
        let vps_id = reference(hosting.vps_id.as_deref())?;
        let vps = self.vps_by_id.get(vps_id).copied();
        if vps.is_none() {
            log::debug!("Hosting {} references missing VPS {vps_id}", hosting.name);
        }
        vps
    }

    /// `hosting.ip_address`, else the resolved server's address.
    #[must_use]
    pub fn expected_ip_for(&self, domain: &Domain) -> Option<&'a str> {
        self.resolve_hosting_for(domain)
            .and_then(|hosting| hosting.ip_address.as_deref())
            .filter(|ip| !ip.is_empty())
            .or_else(|| {
                self.resolve_vps_for(domain)
                    .map(|vps| vps.ip_address.as_str())
                    .filter(|ip| !ip.is_empty())
            })
    }

    /// Domains pointing at a package, by `hosting_id` or by `primary_domain`,
    /// deduplicated by `domain_name`.
    #[must_use]
    pub fn domains_for_hosting(&self, hosting: &HostingPackage) -> Vec<&'a Domain> {
        let mut positions = Vec::new();
        self.collect_hosting_domains(hosting, &mut positions);
        self.unique_by_name(positions)
    }

    /// Domains served by a server: through any package on it, or through a legacy
    /// `a_record` equal to its address. Deduplicated by `domain_name`.
    #[must_use]
    pub fn domains_for_vps(&self, vps: &Vps) -> Vec<&'a Domain> {
        let mut positions = Vec::new();
        for hosting in self.hostings_on_vps(vps) {
            self.collect_hosting_domains(hosting, &mut positions);
        }
        if let Some(found) = self.domains_by_a_record.get(vps.ip_address.as_str()) {
            positions.extend_from_slice(found);
        }
        self.unique_by_name(positions)
    }

    /// Packages whose `vps_id` is this server, in collection order.
    #[must_use]
    pub fn hostings_on_vps(&self, vps: &Vps) -> Vec<&'a HostingPackage> {
        self.hostings_by_vps_id
            .get(vps.id.as_str())
            .cloned()
            .unwrap_or_default()
    }

    /// Hierarchy view of every package and every server.
    #[must_use]
    pub fn topology(&self) -> InfrastructureTopology {
        let hostings = self
            .hostings
            .iter()
            .map(|hosting| HostingNode {
                hosting: hosting.clone(),
                domains: self
                    .domains_for_hosting(hosting)
                    .into_iter()
                    .cloned()
                    .collect(),
            })
            .collect();

        let servers = self
            .servers
            .iter()
            .map(|vps| VpsNode {
                vps: vps.clone(),
                hostings: self.hostings_on_vps(vps).into_iter().cloned().collect(),
                domains: self.domains_for_vps(vps).into_iter().cloned().collect(),
            })
            .collect();

        InfrastructureTopology { hostings, servers }
    }

    fn collect_hosting_domains(&self, hosting: &HostingPackage, positions: &mut Vec<usize>) {
        if let Some(found) = self.domains_by_hosting_id.get(hosting.id.as_str()) {
            positions.extend_from_slice(found);
        }
        if !hosting.primary_domain.is_empty() {
            if let Some(found) = self.domains_by_name.get(hosting.primary_domain.as_str()) {
                positions.extend_from_slice(found);
            }
        }
    }

    /// Collapses records sharing a `domain_name`: the name keeps the position of
    /// its first occurrence and the value of its last one.
    fn unique_by_name(&self, mut positions: Vec<usize>) -> Vec<&'a Domain> {
        positions.sort_unstable();
        positions.dedup();

        let mut slot_by_name: HashMap<&str, usize> = HashMap::new();
        let mut unique: Vec<&'a Domain> = Vec::with_capacity(positions.len());
        for position in positions {
            let domain = &self.domains[position];
            match slot_by_name.get(domain.domain_name.as_str()) {
                Some(&slot) => unique[slot] = domain,
                None => {
                    slot_by_name.insert(domain.domain_name.as_str(), unique.len());
                    unique.push(domain);
                }
            }
        }
        unique
    }
}

/// A blank reference (as submitted by an untouched form select) is unset.
fn reference(id: Option<&str>) -> Option<&str> {
    id.filter(|id| !id.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{domain, hosting, vps};

    fn linked(mut d: Domain, hosting_id: &str) -> Domain {
        d.hosting_id = Some(hosting_id.to_string());
        d
    }

    #[test]
    fn falls_back_to_primary_domain_without_hosting_id() {
        let domains = vec![domain("d1", "floraldesign.com", "2025-01-01")];
        let hostings = vec![
            hosting("h1", "Business", "techsolutions.vn", None),
            hosting("h2", "WordPress", "floraldesign.com", None),
        ];
        let resolver = LinkageResolver::new(&domains, &hostings, &[]);

        let resolved = resolver.resolve_hosting_for(&domains[0]).unwrap();
        assert_eq!(resolved.id, "h2");
    }

    #[test]
    fn explicit_hosting_id_wins_over_name_match() {
        let domains = vec![linked(domain("d1", "floraldesign.com", "2025-01-01"), "h1")];
        let hostings = vec![
            hosting("h1", "Business", "techsolutions.vn", None),
            hosting("h2", "WordPress", "floraldesign.com", None),
        ];
        let resolver = LinkageResolver::new(&domains, &hostings, &[]);

        assert_eq!(resolver.resolve_hosting_for(&domains[0]).unwrap().id, "h1");
    }

    #[test]
    fn dangling_hosting_id_does_not_fall_back() {
        let domains = vec![linked(domain("d1", "floraldesign.com", "2025-01-01"), "gone")];
        let hostings = vec![hosting("h2", "WordPress", "floraldesign.com", None)];
        let resolver = LinkageResolver::new(&domains, &hostings, &[]);

        assert!(resolver.resolve_hosting_for(&domains[0]).is_none());
    }

    #[test]
    fn duplicate_primary_domain_resolves_to_first_package() {
        let domains = vec![domain("d1", "shared.com", "2025-01-01")];
        let hostings = vec![
            hosting("h1", "First", "shared.com", None),
            hosting("h2", "Second", "shared.com", None),
        ];
        let resolver = LinkageResolver::new(&domains, &hostings, &[]);

        assert_eq!(resolver.resolve_hosting_for(&domains[0]).unwrap().id, "h1");
    }

    #[test]
    fn unlinked_domain_resolves_to_nothing() {
        let domains = vec![domain("d4", "unused-project.net", "2024-01-01")];
        let hostings = vec![hosting("h1", "Business", "techsolutions.vn", Some("v1"))];
        let servers = vec![vps("v1", "SG-01", "103.100.200.50")];
        let resolver = LinkageResolver::new(&domains, &hostings, &servers);

        assert!(resolver.resolve_hosting_for(&domains[0]).is_none());
        assert!(resolver.resolve_vps_for(&domains[0]).is_none());
        assert!(resolver.expected_ip_for(&domains[0]).is_none());
    }

    #[test]
    fn vps_resolves_through_hosting() {
        let domains = vec![linked(domain("d1", "a.com", "2025-01-01"), "h1")];
        let hostings = vec![hosting("h1", "Business", "", Some("v2"))];
        let servers = vec![
            vps("v1", "SG-01", "10.0.0.1"),
            vps("v2", "US-05", "10.0.0.2"),
        ];
        let resolver = LinkageResolver::new(&domains, &hostings, &servers);

        assert_eq!(resolver.resolve_vps_for(&domains[0]).unwrap().id, "v2");
        assert_eq!(resolver.expected_ip_for(&domains[0]), Some("10.0.0.2"));
    }

    #[test]
    fn hosting_ip_takes_precedence_over_vps_ip() {
        let domains = vec![domain("d1", "a.com", "2025-01-01")];
        let mut h = hosting("h1", "Business", "a.com", Some("v1"));
        h.ip_address = Some("192.0.2.10".to_string());
        let hostings = vec![h];
        let servers = vec![vps("v1", "SG-01", "10.0.0.1")];
        let resolver = LinkageResolver::new(&domains, &hostings, &servers);

        assert_eq!(resolver.expected_ip_for(&domains[0]), Some("192.0.2.10"));
    }

    #[test]
    fn dangling_vps_id_falls_back_to_primary_domain_index() {
        // h1 is linked explicitly but points at a removed server; h2 claims the
        // same name on a live one.
        let domains = vec![linked(domain("d1", "a.com", "2025-01-01"), "h1")];
        let hostings = vec![
            hosting("h1", "Old", "legacy.com", Some("removed")),
            hosting("h2", "New", "a.com", Some("v1")),
        ];
        let servers = vec![vps("v1", "SG-01", "10.0.0.1")];
        let resolver = LinkageResolver::new(&domains, &hostings, &servers);

        assert_eq!(resolver.resolve_hosting_for(&domains[0]).unwrap().id, "h1");
        assert_eq!(resolver.resolve_vps_for(&domains[0]).unwrap().id, "v1");
        assert!(resolver.vps_of(&hostings[0]).is_none());
    }

    #[test]
    fn primary_domain_vps_index_keeps_last_package() {
        let domains = vec![domain("d1", "a.com", "2025-01-01")];
        let hostings = vec![
            hosting("h1", "Unassigned", "a.com", None),
            hosting("h2", "Old", "a.com", Some("v1")),
            hosting("h3", "New", "a.com", Some("v2")),
        ];
        let servers = vec![
            vps("v1", "SG-01", "10.0.0.1"),
            vps("v2", "US-05", "10.0.0.2"),
        ];
        let resolver = LinkageResolver::new(&domains, &hostings, &servers);

        assert_eq!(resolver.resolve_hosting_for(&domains[0]).unwrap().id, "h1");
        assert_eq!(resolver.resolve_vps_for(&domains[0]).unwrap().id, "v2");
        assert_eq!(resolver.expected_ip_for(&domains[0]), Some("10.0.0.2"));
    }

    #[test]
    fn blank_hosting_id_falls_back_to_name_match() {
        let domains = vec![linked(domain("d1", "a.com", "2025-01-01"), "")];
        let hostings = vec![hosting("h1", "Business", "a.com", Some("v1"))];
        let servers = vec![vps("v1", "SG-01", "10.0.0.1")];
        let resolver = LinkageResolver::new(&domains, &hostings, &servers);

        assert_eq!(resolver.resolve_hosting_for(&domains[0]).unwrap().id, "h1");
        assert_eq!(resolver.resolve_vps_for(&domains[0]).unwrap().id, "v1");
        assert_eq!(resolver.expected_ip_for(&domains[0]), Some("10.0.0.1"));
        assert_eq!(resolver.domains_for_hosting(&hostings[0]).len(), 1);
    }

    #[test]
    fn blank_vps_id_counts_as_unassigned() {
        let hostings = vec![hosting("h1", "Business", "a.com", Some(" "))];
        let servers = vec![vps("v1", "SG-01", "10.0.0.1")];
        let resolver = LinkageResolver::new(&[], &hostings, &servers);

        assert!(resolver.vps_of(&hostings[0]).is_none());
        assert!(resolver.hostings_on_vps(&servers[0]).is_empty());
    }

    #[test]
    fn domains_for_hosting_unions_and_dedups_by_name() {
        let domains = vec![
            linked(domain("d1", "extra.com", "2025-01-01"), "h1"),
            domain("d2", "main.com", "2025-01-01"),
            linked(domain("d3", "main.com", "2026-01-01"), "h1"),
            domain("d4", "other.com", "2025-01-01"),
        ];
        let hostings = vec![hosting("h1", "Business", "main.com", None)];
        let resolver = LinkageResolver::new(&domains, &hostings, &[]);

        let found = resolver.domains_for_hosting(&hostings[0]);
        let names: Vec<&str> = found.iter().map(|d| d.domain_name.as_str()).collect();
        assert_eq!(names, vec!["extra.com", "main.com"]);
        // last-seen record wins for the duplicated name
        assert_eq!(found[1].id, "d3");
    }

    #[test]
    fn domains_for_vps_includes_legacy_a_record() {
        let mut pointed = domain("d3", "manual.io", "2025-01-01");
        pointed.a_record = Some("10.0.0.1".to_string());
        let mut elsewhere = domain("d4", "elsewhere.io", "2025-01-01");
        elsewhere.a_record = Some("1.1.1.1".to_string());

        let domains = vec![
            linked(domain("d1", "a.com", "2025-01-01"), "h1"),
            domain("d2", "b.com", "2025-01-01"),
            pointed,
            elsewhere,
        ];
        let hostings = vec![
            hosting("h1", "One", "", Some("v1")),
            hosting("h2", "Two", "b.com", Some("v1")),
            hosting("h3", "Three", "c.com", Some("v2")),
        ];
        let servers = vec![
            vps("v1", "SG-01", "10.0.0.1"),
            vps("v2", "US-05", "10.0.0.2"),
        ];
        let resolver = LinkageResolver::new(&domains, &hostings, &servers);

        let names: Vec<&str> = resolver
            .domains_for_vps(&servers[0])
            .iter()
            .map(|d| d.domain_name.as_str())
            .collect();
        assert_eq!(names, vec!["a.com", "b.com", "manual.io"]);
        assert!(resolver.domains_for_vps(&servers[1]).is_empty());
        assert_eq!(resolver.hostings_on_vps(&servers[0]).len(), 2);
    }

    #[test]
    fn topology_covers_every_package_and_server() {
        let domains = vec![domain("d1", "a.com", "2025-01-01")];
        let hostings = vec![
            hosting("h1", "One", "a.com", Some("v1")),
            hosting("h2", "Two", "none.com", None),
        ];
        let servers = vec![
            vps("v1", "SG-01", "10.0.0.1"),
            vps("v2", "Idle", "10.0.0.2"),
        ];
        let resolver = LinkageResolver::new(&domains, &hostings, &servers);

        let topology = resolver.topology();
        assert_eq!(topology.hostings.len(), 2);
        assert_eq!(topology.hostings[0].domains.len(), 1);
        assert!(topology.hostings[1].domains.is_empty());
        assert_eq!(topology.servers[0].hostings.len(), 1);
        assert_eq!(topology.servers[0].domains[0].id, "d1");
        assert!(topology.servers[1].domains.is_empty());
    }
}
