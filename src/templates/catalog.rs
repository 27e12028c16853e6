use std::path::PathBuf;
use serde::Serialize;
use crate::error::Result;
use crate::models::{FontEntry, FontFamily};

/// Namespace group holding the font data sets
pub const FONTS_GROUP: &str = "Fonts";
/// Uniform type identifier of a font resource
pub const FONT_TYPE_IDENTIFIER: &str = "public.font";

/// A `Contents.json` file, relative to the sources directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogFile {
    pub relative_path: PathBuf,
    pub contents: String,
}

#[derive(Serialize)]
struct Info {
    author: &'static str,
    version: u32,
}

const INFO: Info = Info { author: "xcode", version: 1 };

#[derive(Serialize)]
struct CatalogContents {
    info: Info,
}

#[derive(Serialize)]
struct GroupProperties {
    #[serde(rename = "provides-namespace")]
    provides_namespace: bool,
}

#[derive(Serialize)]
struct GroupContents {
    info: Info,
    properties: GroupProperties,
}

#[derive(Serialize)]
struct DataItem {
    filename: String,
    idiom: &'static str,
    #[serde(rename = "universal-type-identifier")]
    universal_type_identifier: &'static str,
}

/// Data sets carry no properties; serialized as `{}`
#[derive(Serialize)]
struct DataProperties {}

#[derive(Serialize)]
struct DataSetContents {
    data: Vec<DataItem>,
    info: Info,
    properties: DataProperties,
}

/// Directory name of the family's asset catalog
pub fn catalog_dir_name(family: &FontFamily) -> String {
    format!("{}.xcassets", family.package_name())
}

/// Directory of one font's data set, relative to the sources directory
pub fn data_set_dir(family: &FontFamily, font: &FontEntry) -> PathBuf {
    PathBuf::from(catalog_dir_name(family))
        .join(FONTS_GROUP)
        .join(format!("{}.dataset", font.data_set_id))
}

/// Render every `Contents.json` of the family's asset catalog.
///
/// The font bytes themselves are copied by the caller next to each data
/// set's `Contents.json`, under the source file's name.
pub fn render_catalog(family: &FontFamily) -> Result<Vec<CatalogFile>> {
    let root = PathBuf::from(catalog_dir_name(family));
    let mut files = vec![
        CatalogFile {
            relative_path: root.join("Contents.json"),
            contents: to_json(&CatalogContents { info: INFO })?,
        },
        CatalogFile {
            relative_path: root.join(FONTS_GROUP).join("Contents.json"),
            contents: to_json(&GroupContents {
                info: INFO,
                properties: GroupProperties { provides_namespace: true },
            })?,
        },
    ];

    for font in family.fonts() {
        let contents = DataSetContents {
            data: vec![DataItem {
                filename: font.file_name(),
                idiom: "universal",
                universal_type_identifier: FONT_TYPE_IDENTIFIER,
            }],
            info: INFO,
            properties: DataProperties {},
        };
        files.push(CatalogFile {
            relative_path: data_set_dir(family, font).join("Contents.json"),
            contents: to_json(&contents)?,
        });
    }

    Ok(files)
}

fn to_json<T: Serialize>(value: &T) -> Result<String> {
    let mut json = serde_json::to_string_pretty(value)?;
    json.push('\n');
    Ok(json)
}
