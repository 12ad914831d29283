use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, TenonError};
use crate::model::{Component, JoineryUnit};
use crate::store::DataStore;
use chrono::Utc;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::fs::File;
use std::io::Write;

/// Writes a gzipped tar snapshot of the store (units and components as
/// JSON) into the current directory.
pub fn run<S: DataStore>(store: &S, unit_id: Option<&str>) -> Result<CmdResult> {
    let units = match unit_id {
        Some(id) => vec![store.get_unit(id)?],
        None => store.list_units()?,
    };
    let components = store.list_components(unit_id)?;

    if units.is_empty() && components.is_empty() {
        let mut res = CmdResult::default();
        res.add_message(CmdMessage::info("Nothing to export."));
        return Ok(res);
    }

    let now = Utc::now();
    let filename = format!("tenon-{}.tar.gz", now.format("%Y-%m-%d_%H%M%S"));
    let file = File::create(&filename).map_err(TenonError::Io)?;
    write_archive(file, &units, &components)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Exported {} unit(s) and {} component(s) to {}",
        units.len(),
        components.len(),
        filename
    )));
    Ok(result)
}

fn write_archive<W: Write>(
    writer: W,
    units: &[JoineryUnit],
    components: &[Component],
) -> Result<()> {
    let enc = GzEncoder::new(writer, Compression::default());
    let mut tar = tar::Builder::new(enc);

    append_json(&mut tar, "tenon/units.json", units)?;
    append_json(&mut tar, "tenon/components.json", components)?;

    tar.finish().map_err(TenonError::Io)?;
    Ok(())
}

fn append_json<W: Write, T: serde::Serialize + ?Sized>(
    tar: &mut tar::Builder<W>,
    name: &str,
    value: &T,
) -> Result<()> {
    let content = serde_json::to_string_pretty(value).map_err(TenonError::Serialization)?;

    let mut header = tar::Header::new_gnu();
    header.set_size(content.len() as u64);
    header.set_mode(0o644);
    header.set_cksum();

    tar.append_data(&mut header, name, content.as_bytes())
        .map_err(TenonError::Io)
}
