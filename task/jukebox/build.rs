// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::env;
use std::fmt::Write as _;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Keys on a full keyboard, A0 through C8.
const KEYS: i32 = 88;
/// A4 is the 49th key, counting A0 as the first.
const A4_KEY: i32 = 49;
const A4_HZ: f64 = 440.0;

/// Equal-tempered pitch of `key`, rounded to the nearest whole Hz the timer
/// can produce.
fn key_hz(key: i32) -> u16 {
    let semitones = f64::from(key - A4_KEY);
    (A4_HZ * (semitones / 12.0).exp2()).round() as u16
}

fn piano_table() -> String {
    let mut src = format!("const PIANO_NOTES_HZ: [u16; {}] = [\n", KEYS);
    for key in 1..=KEYS {
        // Writing into a String can't fail.
        let _ = writeln!(src, "    {}, // key {}", key_hz(key), key);
    }
    src.push_str("];\n");
    src
}

fn main() -> io::Result<()> {
    let out = PathBuf::from(env::var_os("OUT_DIR").ok_or_else(|| {
        io::Error::new(io::ErrorKind::NotFound, "OUT_DIR unset")
    })?);

    fs::write(out.join("piano.rs"), piano_table())?;

    // cortex-m-rt's link.x pulls in memory.x from the search path.
    if env::var_os("CARGO_FEATURE_BOARD").is_some() {
        fs::copy("memory.x", out.join("memory.x"))?;
        println!("cargo:rustc-link-search={}", out.display());
    }

    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
    Ok(())
}
