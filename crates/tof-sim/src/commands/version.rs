use std::error::Error;

pub fn run() -> Result<(), Box<dyn Error>> {
    println!("{}", env!("CARGO_PKG_VERSION"));
    Ok(())
}

#[cfg(test)]
mod tests {
    #[test]
    fn version_matches_manifest() {
        assert!(!env!("CARGO_PKG_VERSION").is_empty());
        super::run().unwrap();
    }
}
