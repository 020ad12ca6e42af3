// Fallback variant used when generated variant.rs is absent in a clean checkout.
// aegis-provisioner overwrites src/variant.rs with the selected deployment target.

use crate::record::KeyRecord;

pub const ACTIVE: KeyRecord<'static> = KeyRecord::new(
    "1s1hvhdqbvgq4s4u4om55gbfdf27tiqin4981quuk0571t1n8hf8",
    "MY_BANK_ANDROID",
);
