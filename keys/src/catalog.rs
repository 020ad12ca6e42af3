//! Deployment targets the library has been built for.

use crate::record::KeyRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeploymentTarget {
    pub client_id: &'static str,
    /// `None` when the key is only handed out at provisioning time.
    pub registration_key: Option<&'static str>,
}

impl DeploymentTarget {
    pub fn record(&self) -> Option<KeyRecord<'static>> {
        self.registration_key
            .map(|key| KeyRecord::new(key, self.client_id))
    }
}

pub const MY_BANK_ANDROID: DeploymentTarget = DeploymentTarget {
    client_id: "MY_BANK_ANDROID",
    registration_key: Some("1s1hvhdqbvgq4s4u4om55gbfdf27tiqin4981quuk0571t1n8hf8"),
};

pub const MY_FINTECH_PROD: DeploymentTarget = DeploymentTarget {
    client_id: "MY_FINTECH_PROD",
    registration_key: Some("bt0l3q7e67osg856choik0rrplumu7a8deq4mos3q329tubqt7k"),
};

pub const UCO_BANK_PROD_ANDROID: DeploymentTarget = DeploymentTarget {
    client_id: "UCO_BANK_PROD_ANDROID",
    registration_key: None,
};

pub static TARGETS: &[DeploymentTarget] = &[
    MY_BANK_ANDROID,
    MY_FINTECH_PROD,
    UCO_BANK_PROD_ANDROID,
];

pub fn lookup(client_id: &str) -> Option<&'static DeploymentTarget> {
    TARGETS.iter().find(|target| target.client_id == client_id)
}
