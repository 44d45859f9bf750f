use anyhow::Context;
use anyhow::Result;
use std::fs::File;
use std::io::BufReader;
use std::io::BufWriter;
use std::io::Write;
use std::path::Path;

/// for records that can be written to and loaded from disk as JSON.
///
/// Writes go to a sibling temp file which is renamed over the target, so a
/// failed or interrupted write never corrupts the previous valid record.
pub trait Disk: serde::Serialize + serde::de::DeserializeOwned {
    /// Returns the name of the record for logging
    fn name() -> &'static str;

    /// read from disk
    fn load(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("open {} at {}", Self::name(), path.display()))?;
        let record = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("parse {} at {}", Self::name(), path.display()))?;
        log::debug!("{:<24}{}", format!("loaded {}", Self::name()), path.display());
        Ok(record)
    }

    /// write to disk
    fn save(&self, path: &Path) -> Result<()> {
        write(path, self).with_context(|| format!("save {} at {}", Self::name(), path.display()))?;
        log::debug!("{:<24}{}", format!("saved {}", Self::name()), path.display());
        Ok(())
    }
}

/// serialize a value to JSON at path via write-to-temp-then-rename
pub fn write<T>(path: &Path, value: &T) -> Result<()>
where
    T: serde::Serialize,
{
    let tmp = path.with_extension("tmp");
    let file = File::create(&tmp).with_context(|| format!("create {}", tmp.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer(&mut writer, value)?;
    writer.flush()?;
    std::fs::rename(&tmp, path).with_context(|| format!("replace {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde::Serialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Record {
        values: Vec<f32>,
        count: usize,
    }
    impl Disk for Record {
        fn name() -> &'static str {
            "record"
        }
    }

    fn scratch(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("qholdem-{}-{}", name, std::process::id()))
    }

    #[test]
    fn roundtrip() {
        let path = scratch("roundtrip.json");
        let record = Record {
            values: vec![0.5, -1.25, 3.0],
            count: 7,
        };
        record.save(&path).unwrap();
        assert_eq!(Record::load(&path).unwrap(), record);
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn missing_file_errors() {
        assert!(Record::load(&scratch("absent.json")).is_err());
    }

    #[test]
    fn corrupt_file_errors() {
        let path = scratch("corrupt.json");
        std::fs::write(&path, b"not json").unwrap();
        assert!(Record::load(&path).is_err());
        std::fs::remove_file(&path).ok();
    }
}
