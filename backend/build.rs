use std::fs;
use std::path::Path;

fn main() {
    let out_dir = Path::new("static");
    let dist_dir = Path::new("../frontend/dist");

    if dist_dir.exists() {
        if out_dir.exists() {
            fs::remove_dir_all(out_dir).expect("failed to clear backend/static");
        }
        fs::create_dir_all(out_dir).expect("failed to create backend/static");
        fs_extra::dir::copy(
            dist_dir,
            out_dir,
            &fs_extra::dir::CopyOptions::new().overwrite(true).copy_inside(true),
        )
        .expect("failed to copy frontend/dist into backend/static");
    }
    // include_dir! needs the directory even before the frontend has been built.
    fs::create_dir_all(out_dir.join("dist")).expect("failed to create backend/static/dist");

    println!("cargo:rerun-if-changed=../frontend/dist");
}
