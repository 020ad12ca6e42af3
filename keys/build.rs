use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// A source file aegis-provisioner writes, paired with the checked-in
/// fallback used when it has not been run.
struct Provisioned {
    generated: &'static str,
    fallback: &'static str,
}

const PROVISIONED: &[Provisioned] = &[Provisioned {
    generated: "variant.rs",
    fallback: "variant.defaults.rs",
}];

fn install_fallback(src_dir: &Path, file: &Provisioned) -> Result<bool, String> {
    let generated = src_dir.join(file.generated);
    let fallback = src_dir.join(file.fallback);
    println!("cargo:rerun-if-changed={}", generated.display());
    println!("cargo:rerun-if-changed={}", fallback.display());

    if generated.is_file() {
        return Ok(false);
    }
    if !fallback.is_file() {
        return Err(format!(
            "{} was not provisioned and no fallback exists at {}",
            file.generated,
            fallback.display()
        ));
    }
    fs::copy(&fallback, &generated)
        .map(|_| true)
        .map_err(|error| format!("copying {} into place: {}", fallback.display(), error))
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    let src_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir).join("src"),
        Err(_) => panic!("aegis-keys build script must run under cargo"),
    };

    for file in PROVISIONED {
        match install_fallback(&src_dir, file) {
            Ok(true) => println!(
                "cargo:warning=aegis-keys: no deployment target provisioned, building with {}",
                file.fallback
            ),
            Ok(false) => {}
            Err(message) => panic!("aegis-keys: {}", message),
        }
    }
}
