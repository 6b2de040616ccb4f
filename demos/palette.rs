//! Prints every markup character next to the sequence it produces.
//!
//! Run with `cargo run --example palette`.

use atcolor::{Result, Sgr, cprintln, printf};

fn main() -> Result<()> {
    cprintln!("@{!}Attributes")?;
    for (ch, name) in [
        ('|', "reset"),
        ('!', "bold"),
        ('.', "dim"),
        ('/', "italic"),
        ('_', "underline"),
        ('^', "blink"),
        ('&', "fast blink"),
        ('?', "reverse"),
        ('-', "hide"),
    ] {
        let group = ch.to_string();
        let sgr = Sgr::from_group(&group)?;
        printf("  @@{} {}{}@| {}\n", &[&ch, &sgr, &name, &sgr.codes()])?;
    }

    cprintln!("@{!}Colors")?;
    for (ch, name) in [
        ('k', "black"),
        ('r', "red"),
        ('g', "green"),
        ('y', "yellow"),
        ('b', "blue"),
        ('m', "magenta"),
        ('c', "cyan"),
        ('w', "white"),
        ('d', "default"),
    ] {
        let upper = ch.to_ascii_uppercase();
        let fg = Sgr::from_group(&ch.to_string())?;
        let bg = Sgr::from_group(&upper.to_string())?;
        let padded = format!("{name:<8}");
        printf(
            "  @@{} {}{}@|  @@{} {}{}@|\n",
            &[&ch, &fg, &padded, &upper, &bg, &padded],
        )?;
    }
    Ok(())
}
