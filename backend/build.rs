//! Bundles the trunk output of the frontend (`../frontend/dist`) next to the
//! backend so `actix-files` can serve it from `static/dist`.

use std::env;
use std::error::Error;
use std::fs;
use std::path::PathBuf;

fn main() -> Result<(), Box<dyn Error>> {
    println!("cargo:rerun-if-changed=../frontend/dist");

    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let dist_dir = manifest_dir.join("../frontend/dist");
    if !dist_dir.is_dir() {
        println!("cargo:warning=frontend/dist not found; the API will run without the web client");
        return Ok(());
    }

    let out_dir = manifest_dir.join("static");
    if out_dir.exists() {
        fs::remove_dir_all(&out_dir)?;
    }
    fs::create_dir_all(&out_dir)?;

    let options = fs_extra::dir::CopyOptions::new().overwrite(true);
    fs_extra::dir::copy(&dist_dir, &out_dir, &options)?;
    Ok(())
}
