//! Native accessors for the registration key and client id the Android app
//! presents to the Aegis API. Values are fixed per build; see `aegis-provisioner`.

use jni::objects::JObject;
use jni::sys::{jint, jstring, JNI_VERSION_1_6};
use jni::JNIEnv;
use std::os::raw::c_void;

#[macro_use]
extern crate log;

pub mod catalog;
pub mod error;
pub mod record;
pub mod shim;
mod variant;

pub use error::RecordError;
pub use record::KeyRecord;
pub use shim::{SecretAccessor, SecretShim, LOG_TAG};

#[no_mangle]
pub extern "system" fn JNI_OnLoad(_vm: jni::JavaVM, _reserved: *mut c_void) -> jint {
    #[cfg(target_os = "android")]
    android_logger::init_once(
        android_logger::Config::default()
            .with_tag(LOG_TAG)
            .with_max_level(log::LevelFilter::Debug),
    );
    debug!(target: LOG_TAG, "Native library loaded, JNI_OnLoad called");

    JNI_VERSION_1_6
}

#[no_mangle]
pub extern "system" fn Java_com_aegis_sfe_security_SecureKeys_getRegistrationKey(
    env: JNIEnv,
    _this: JObject,
) -> jstring {
    to_java_string(&env, SecretShim::active().registration_key())
}

#[no_mangle]
pub extern "system" fn Java_com_aegis_sfe_security_SecureKeys_getClientId(
    env: JNIEnv,
    _this: JObject,
) -> jstring {
    to_java_string(&env, SecretShim::active().client_id())
}

/// On failure the JVM exception stays pending and surfaces in the caller.
fn to_java_string(env: &JNIEnv, value: String) -> jstring {
    match env.new_string(value) {
        Ok(s) => s.into_raw(),
        Err(e) => {
            error!(target: LOG_TAG, "Failed to create Java string: {:?}", e);
            std::ptr::null_mut()
        }
    }
}
