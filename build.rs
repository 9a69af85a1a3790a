use std::env;
use std::fs;
use std::path::Path;

// Expone las variables de .env como variables de entorno de compilación
// (BACKEND_URL la consume utils::constants via option_env!).
fn main() {
    let env_file = Path::new(".env");

    if env_file.exists() {
        println!("cargo:rerun-if-changed=.env");

        if let Ok(contents) = fs::read_to_string(env_file) {
            for line in contents.lines() {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }

                if let Some((key, value)) = line.split_once('=') {
                    let key = key.trim();
                    let value = value.trim();

                    // Las variables ya definidas en el entorno tienen prioridad
                    if env::var(key).is_err() {
                        println!("cargo:rustc-env={}={}", key, value);
                    }
                }
            }
        }
    } else {
        println!("cargo:warning=Sin archivo .env, usando valores por defecto (backend local).");
    }

    println!("cargo:rerun-if-changed=build.rs");
}
