//! Print export: wraps the rendered preview in a standalone page whose print
//! stylesheet hides everything but the preview, then asks the browser to open
//! its print dialog. Nothing comes back from that hand-off.

use crate::render::html::{escape, PREVIEW_ELEMENT_ID};
use crate::render::preview::FormattedDocument;

/// Print margin applied as padding on the preview root.
pub const PRINT_PADDING: &str = "2.5rem";
pub const PRINT_FONT_SIZE: &str = "11pt";

pub fn print_stylesheet() -> String {
    format!(
        r#"@media print {{
  body * {{
    visibility: hidden;
  }}
  #{id}, #{id} * {{
    visibility: visible;
  }}
  #{id} {{
    position: absolute;
    left: 0;
    top: 0;
    width: 100%;
    margin: 0;
    padding: {padding} !important;
    box-shadow: none;
    min-height: 100vh;
    font-size: {font_size};
  }}
  @page {{
    margin: 0;
    size: auto;
  }}
}}
.pre-line {{
  white-space: pre-line;
}}
"#,
        id = PREVIEW_ELEMENT_ID,
        padding = PRINT_PADDING,
        font_size = PRINT_FONT_SIZE,
    )
}

/// Full HTML page for the browser's print pipeline.
pub fn print_page(doc: &FormattedDocument) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title} - Resume</title>
<style>
{style}</style>
</head>
<body>
{preview}<script>window.addEventListener("load", function () {{ window.print(); }});</script>
</body>
</html>
"#,
        title = escape(&doc.header.display_name),
        style = print_stylesheet(),
        preview = doc.to_html(),
    )
}
