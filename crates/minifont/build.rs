use std::{env, fs, path::PathBuf};

use minifont_compiler::compile_bdf;

fn main() {
    println!("cargo:rerun-if-env-changed=MINIFONT_BDF");

    let source = env::var_os("MINIFONT_BDF")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("data/minifont.bdf"));
    println!("cargo:rerun-if-changed={}", source.display());

    let input = fs::read_to_string(&source)
        .unwrap_or_else(|err| panic!("cannot read {}: {}", source.display(), err));

    let report = compile_bdf(&input)
        .unwrap_or_else(|err| panic!("cannot compile {}: {}", source.display(), err));

    for err in &report.rejected {
        println!("cargo:warning=skipped glyph: {}", err);
    }

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    report.font.write_to(&out_dir).unwrap();
}
