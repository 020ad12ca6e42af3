use sha2::{Digest, Sha256};

use crate::error::RecordError;

/// The `{registrationKey, clientId}` pair embedded for one deployment target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyRecord<'a> {
    pub registration_key: &'a str,
    pub client_id: &'a str,
}

impl<'a> KeyRecord<'a> {
    pub const fn new(registration_key: &'a str, client_id: &'a str) -> Self {
        Self {
            registration_key,
            client_id,
        }
    }

    /// Checks both values against the formats the backend issues.
    pub fn validate(&self) -> Result<(), RecordError> {
        validate_registration_key(self.registration_key)?;
        validate_client_id(self.client_id)
    }

    /// Short SHA-256 tag of the registration key, safe to print.
    pub fn fingerprint(&self) -> String {
        let hash = Sha256::digest(self.registration_key.as_bytes());
        format!("sha256:{}", hex::encode(&hash[..8]))
    }
}

// Issued keys have been 51 and 52 characters long, so length is not checked.
fn validate_registration_key(key: &str) -> Result<(), RecordError> {
    if key.is_empty() {
        return Err(RecordError::EmptyKey);
    }
    if let Some(c) = key
        .chars()
        .find(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit()))
    {
        return Err(RecordError::KeyCharacter(c));
    }
    Ok(())
}

fn validate_client_id(client_id: &str) -> Result<(), RecordError> {
    if client_id.is_empty() {
        return Err(RecordError::EmptyClientId);
    }
    if let Some(c) = client_id
        .chars()
        .find(|c| !(c.is_ascii_uppercase() || c.is_ascii_digit() || *c == '_'))
    {
        return Err(RecordError::ClientIdCharacter(c));
    }
    if client_id.starts_with('_') || client_id.ends_with('_') {
        return Err(RecordError::ClientIdUnderscore);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: &str = "1s1hvhdqbvgq4s4u4om55gbfdf27tiqin4981quuk0571t1n8hf8";

    #[test]
    fn accepts_issued_format() {
        assert_eq!(KeyRecord::new(KEY, "MY_BANK_ANDROID").validate(), Ok(()));
    }

    #[test]
    fn accepts_every_catalog_key() {
        for target in crate::catalog::TARGETS {
            if let Some(record) = target.record() {
                assert_eq!(record.validate(), Ok(()), "{}", target.client_id);
            }
        }
        let fintech = crate::catalog::MY_FINTECH_PROD.record().unwrap();
        assert_eq!(fintech.registration_key.len(), 51);
        assert_eq!(fintech.validate(), Ok(()));
    }

    #[test]
    fn rejects_empty_key() {
        assert_eq!(
            KeyRecord::new("", "MY_BANK_ANDROID").validate(),
            Err(RecordError::EmptyKey)
        );
    }

    #[test]
    fn rejects_uppercase_in_key() {
        let key = KEY.replacen('s', "S", 1);
        let err = KeyRecord::new(&key, "MY_BANK_ANDROID")
            .validate()
            .unwrap_err();
        assert_eq!(err, RecordError::KeyCharacter('S'));
    }

    #[test]
    fn rejects_malformed_client_ids() {
        assert_eq!(
            KeyRecord::new(KEY, "").validate(),
            Err(RecordError::EmptyClientId)
        );
        assert_eq!(
            KeyRecord::new(KEY, "my_bank").validate(),
            Err(RecordError::ClientIdCharacter('m'))
        );
        assert_eq!(
            KeyRecord::new(KEY, "MY-BANK").validate(),
            Err(RecordError::ClientIdCharacter('-'))
        );
        assert_eq!(
            KeyRecord::new(KEY, "_MY_BANK").validate(),
            Err(RecordError::ClientIdUnderscore)
        );
    }

    #[test]
    fn fingerprint_hides_key() {
        let record = KeyRecord::new(KEY, "MY_BANK_ANDROID");
        let fingerprint = record.fingerprint();
        assert!(fingerprint.starts_with("sha256:"));
        assert_eq!(fingerprint.len(), "sha256:".len() + 16);
        assert!(!fingerprint.contains(KEY));
        assert_eq!(fingerprint, record.fingerprint());
    }
}
