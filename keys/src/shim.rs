use crate::record::KeyRecord;
use crate::variant;

/// Tag every access record is logged under.
pub const LOG_TAG: &str = "AegisKeys";
pub const REGISTRATION_KEY_ACCESSED: &str = "Registration key accessed";
pub const CLIENT_ID_ACCESSED: &str = "Client ID accessed";

/// The two values the managed side may ask for.
pub trait SecretAccessor {
    fn registration_key(&self) -> String;
    fn client_id(&self) -> String;
}

/// Hands out copies of one key record, logging each access.
#[derive(Debug, Clone, Copy)]
pub struct SecretShim<'a> {
    record: KeyRecord<'a>,
}

impl<'a> SecretShim<'a> {
    pub const fn new(record: KeyRecord<'a>) -> Self {
        Self { record }
    }
}

impl SecretShim<'static> {
    /// The shim over the record compiled into this build.
    pub const fn active() -> Self {
        Self::new(variant::ACTIVE)
    }
}

impl SecretAccessor for SecretShim<'_> {
    fn registration_key(&self) -> String {
        info!(target: LOG_TAG, "{}", REGISTRATION_KEY_ACCESSED);
        self.record.registration_key.to_owned()
    }

    fn client_id(&self) -> String {
        info!(target: LOG_TAG, "{}", CLIENT_ID_ACCESSED);
        self.record.client_id.to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    fn shim_for(target: &catalog::DeploymentTarget) -> SecretShim<'static> {
        SecretShim::new(target.record().expect("catalog key"))
    }

    #[test]
    fn my_bank_android() {
        let shim = shim_for(&catalog::MY_BANK_ANDROID);
        assert_eq!(
            shim.registration_key(),
            "1s1hvhdqbvgq4s4u4om55gbfdf27tiqin4981quuk0571t1n8hf8"
        );
        assert_eq!(shim.client_id(), "MY_BANK_ANDROID");
    }

    #[test]
    fn my_fintech_prod() {
        let shim = shim_for(&catalog::MY_FINTECH_PROD);
        assert_eq!(
            shim.registration_key(),
            "bt0l3q7e67osg856choik0rrplumu7a8deq4mos3q329tubqt7k"
        );
        assert_eq!(shim.client_id(), "MY_FINTECH_PROD");
    }

    #[test]
    fn uco_bank_prod_android() {
        let record = KeyRecord::new(
            "0000000000000000000000000000000000000000000000000000",
            catalog::UCO_BANK_PROD_ANDROID.client_id,
        );
        assert_eq!(SecretShim::new(record).client_id(), "UCO_BANK_PROD_ANDROID");
    }

    #[test]
    fn repeated_calls_return_same_value() {
        let shim = SecretShim::active();
        let key = shim.registration_key();
        let client_id = shim.client_id();
        for _ in 0..100 {
            assert_eq!(shim.registration_key(), key);
            assert_eq!(shim.client_id(), client_id);
        }
    }

    #[test]
    fn active_variant_is_valid() {
        let shim = SecretShim::active();
        let record = KeyRecord::new(&shim.registration_key(), &shim.client_id()).validate();
        assert_eq!(record, Ok(()));
    }

    #[test]
    fn active_variant_matches_catalog_entry() {
        let shim = SecretShim::active();
        if let Some(known) = catalog::lookup(&shim.client_id()).and_then(|t| t.registration_key) {
            assert_eq!(shim.registration_key(), known);
        }
    }
}
