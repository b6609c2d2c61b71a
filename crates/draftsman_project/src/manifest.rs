//! Reading and editing `.csproj` manifests.
//!
//! Only the `<Compile Include="...">` entries matter here: they tell us
//! which source files the project tracks, and renames must keep the
//! designer-file reference current.

use crate::errors::ProjectResult;
use quick_xml::events::Event;
use quick_xml::Reader;

/// All `Compile Include` paths in manifest text, backslashes normalized
/// to forward slashes.
pub fn compile_entries(content: &str) -> ProjectResult<Vec<String>> {
    let mut reader = Reader::from_str(content);
    reader.trim_text(true);

    let mut entries = Vec::new();

    loop {
        match reader.read_event()? {
            Event::Start(ref e) | Event::Empty(ref e) => {
                if e.name().as_ref() == b"Compile" {
                    for attr in e.attributes() {
                        if let Ok(attr) = attr {
                            if attr.key.as_ref() == b"Include" {
                                if let Ok(val) = attr.unescape_value() {
                                    entries.push(val.into_owned().replace('\\', "/"));
                                }
                            }
                        }
                    }
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(entries)
}

/// Whether the manifest tracks the given designer file.
pub fn tracks_designer(content: &str, form_name: &str) -> ProjectResult<bool> {
    let target = format!("{form_name}.Designer.cs");
    Ok(compile_entries(content)?
        .iter()
        .any(|entry| entry == &target || entry.ends_with(&format!("/{target}"))))
}
