use crate::models::identity::{Identity, RoleCheck};
use crate::models::property::Property;

/// Resolves a caller identity to its roles for a given property.
///
/// The government authority is a single identity fixed at construction
/// time (one address per deployment) and immutable afterwards.
/// Ownership is read from the current record, never cached.
#[derive(Debug, Clone)]
pub struct AccessControlGuard {
    government: Identity,
}

impl AccessControlGuard {
    pub fn new(government: Identity) -> Self {
        AccessControlGuard { government }
    }

    pub fn government(&self) -> &Identity {
        &self.government
    }

    /// Role check for a caller against a specific property.
    pub fn check(&self, property: &Property, caller: &Identity) -> RoleCheck {
        RoleCheck {
            is_owner: &property.owner == caller,
            is_government: self.is_government(caller),
        }
    }

    /// Role check that does not depend on any property (e.g. verify,
    /// where only the government role matters).
    pub fn is_government(&self, caller: &Identity) -> bool {
        &self.government == caller
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::identity::Role;

    fn house(owner: &str) -> Property {
        Property {
            id: 1,
            name: "House".to_string(),
            location: "City A".to_string(),
            document_hash: "docHash123".to_string(),
            price: 0,
            owner: Identity::from(owner),
            for_sale: false,
            verified: false,
        }
    }

    #[test]
    fn owner_and_government_are_distinguished() {
        let guard = AccessControlGuard::new(Identity::from("gov"));
        let property = house("alice");

        let owner_check = guard.check(&property, &Identity::from("alice"));
        assert!(owner_check.is_owner);
        assert!(!owner_check.is_government);
        assert_eq!(owner_check.role(), Role::User);

        let gov_check = guard.check(&property, &Identity::from("gov"));
        assert!(!gov_check.is_owner);
        assert!(gov_check.is_government);
        assert_eq!(gov_check.role(), Role::GovernmentAuthority);

        let other_check = guard.check(&property, &Identity::from("mallory"));
        assert!(!other_check.is_owner);
        assert!(!other_check.is_government);
    }
}
