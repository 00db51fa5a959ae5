//! Renders album storage data as Elm source modules.

use crate::domain::entities::{Artist, ImageRef, ModuleName, PreparedAlbum};

use super::album_preparer::PreparedAlbums;

/// Name of the module listing every artist.
pub const INDEX_MODULE: &str = "ArtistsWithAlbums";

/// Module holding the shared record types.
pub const TYPES_MODULE: &str = "AlbumStorageTypes";

const GENERATED_NOTICE: &str = "{-| Generated by albumgen. Do not edit by hand. -}";

/// Quotes `value` as an Elm string literal.
#[must_use]
pub fn elm_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

fn elm_maybe_int(value: Option<u32>) -> String {
    value.map_or_else(|| "Nothing".to_string(), |v| format!("Just {v}"))
}

fn elm_maybe_string(value: Option<&str>) -> String {
    value.map_or_else(|| "Nothing".to_string(), |v| format!("Just {}", elm_string(v)))
}

fn image_record(image: &ImageRef) -> String {
    format!(
        "{{ url = {}, width = {}, height = {} }}",
        elm_string(&image.url),
        elm_maybe_int(image.width),
        elm_maybe_int(image.height)
    )
}

/// Renders `items` as a multi-line Elm list at `indent`.
fn elm_list(items: &[String], indent: &str) -> String {
    if items.is_empty() {
        return "[]".to_string();
    }

    let mut out = String::new();
    for (i, item) in items.iter().enumerate() {
        let lead = if i == 0 { "[ " } else { ", " };
        if i > 0 {
            out.push_str(indent);
        }
        out.push_str(lead);
        out.push_str(item);
        out.push('\n');
    }
    out.push_str(indent);
    out.push(']');
    out
}

fn album_record(album: &PreparedAlbum, indent: &str) -> String {
    let images: Vec<String> = album.images.iter().map(image_record).collect();
    let inner = format!("{indent}  ");
    format!(
        "{{ id = {id}\n{indent}, name = {name}\n{indent}, urlToOpen = {url}\n{indent}, firstImage = {first}\n{indent}, images =\n{inner}  {images}\n{indent}}}",
        id = elm_string(&album.id),
        name = elm_string(&album.name),
        url = elm_maybe_string(album.url_to_open.as_deref()),
        first = image_record(&album.first_image),
        images = elm_list(&images, &format!("{inner}  ")),
    )
}

/// Renders the storage module for one artist.
#[must_use]
pub fn render_artist_module(
    module: &ModuleName,
    artist: &Artist,
    albums: &PreparedAlbums,
) -> String {
    let artist_images: Vec<String> = artist.images.iter().map(image_record).collect();
    let tail: Vec<String> = albums
        .tail
        .iter()
        .map(|album| album_record(album, "        "))
        .collect();

    format!(
        "module {name} exposing (albums, artist)

{notice}

import {types} exposing (Album, Artist)


artist : Artist
artist =
    {{ id = {id}
    , name = {artist_name}
    , shortName = {short_name}
    , images =
        {images}
    }}


albums : ( Album, List Album )
albums =
    ( {head}
    , {tail}
    )
",
        name = module.storage_module(),
        notice = GENERATED_NOTICE,
        types = TYPES_MODULE,
        id = elm_string(&artist.id),
        artist_name = elm_string(&artist.name),
        short_name = elm_string(&artist.http_friendly_short_name),
        images = elm_list(&artist_images, "        "),
        head = album_record(&albums.head, "      "),
        tail = elm_list(&tail, "      "),
    )
}

/// Renders the index module referencing every artist module.
#[must_use]
pub fn render_index_module(modules: &[ModuleName]) -> String {
    let imports: String = modules
        .iter()
        .map(|m| format!("import {}\n", m.storage_module()))
        .collect();
    let entries: Vec<String> = modules
        .iter()
        .map(|m| {
            let storage = m.storage_module();
            format!("( {storage}.artist, {storage}.albums )")
        })
        .collect();

    format!(
        "module {INDEX_MODULE} exposing (all)

{GENERATED_NOTICE}

{imports}import {TYPES_MODULE} exposing (Album, Artist)


all : List ( Artist, ( Album, List Album ) )
all =
    {}
",
        elm_list(&entries, "    ")
    )
}

/// Renders the module declaring the record types the other modules share.
#[must_use]
pub fn render_types_module() -> String {
    format!(
        "module {TYPES_MODULE} exposing (Album, Artist, Image)

{GENERATED_NOTICE}


type alias Image =
    {{ url : String
    , width : Maybe Int
    , height : Maybe Int
    }}


type alias Artist =
    {{ id : String
    , name : String
    , shortName : String
    , images : List Image
    }}


type alias Album =
    {{ id : String
    , name : String
    , urlToOpen : Maybe String
    , firstImage : Image
    , images : List Image
    }}
"
    )
}
