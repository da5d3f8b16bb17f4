//! Standalone HTML report: vis-network graph, category legend, DataTables table.

use serde::Serialize;

use capmap_core::CategoryStyle;

use crate::error::Result;
use crate::network::NetworkPayload;
use crate::table::TableRow;

const VIS_NETWORK_JS: &str =
    "https://unpkg.com/vis-network@9.1.9/standalone/umd/vis-network.min.js";
const JQUERY_JS: &str = "https://code.jquery.com/jquery-3.7.1.min.js";
const DATATABLES_JS: &str = "https://cdn.datatables.net/1.13.8/js/jquery.dataTables.min.js";
const DATATABLES_CSS: &str = "https://cdn.datatables.net/1.13.8/css/jquery.dataTables.min.css";

const STYLE: &str = r#"
body { font-family: sans-serif; margin: 1.5rem; }
#network { width: 100%; height: 720px; border: 1px solid #ddd; }
ul.legend { list-style: none; padding: 0; display: flex; flex-wrap: wrap; gap: 1rem; }
ul.legend li span.swatch { display: inline-block; width: 0.9rem; height: 0.9rem; margin-right: 0.3rem; vertical-align: middle; }
footer { margin-top: 1rem; color: #666; font-size: 0.85rem; }
"#;

/// Everything the page needs besides the data itself.
#[derive(Debug, Clone)]
pub struct HtmlOptions<'a> {
    pub title: &'a str,
    pub page_size: usize,
    pub fingerprint: &'a str,
}

/// Render the full report page.
pub fn render_report(
    payload: &NetworkPayload,
    rows: &[TableRow],
    legend: &[CategoryStyle],
    options: &HtmlOptions<'_>,
) -> Result<String> {
    let title = escape_html(options.title);
    let mut page = String::with_capacity(16 * 1024);

    page.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    page.push_str(&format!("<title>{title}</title>\n"));
    page.push_str(&format!("<script src=\"{VIS_NETWORK_JS}\"></script>\n"));
    page.push_str(&format!("<link rel=\"stylesheet\" href=\"{DATATABLES_CSS}\">\n"));
    page.push_str(&format!("<script src=\"{JQUERY_JS}\"></script>\n"));
    page.push_str(&format!("<script src=\"{DATATABLES_JS}\"></script>\n"));
    page.push_str(&format!("<style>{STYLE}</style>\n</head>\n<body>\n"));
    page.push_str(&format!("<h1>{title}</h1>\n"));
    page.push_str("<div id=\"network\"></div>\n");
    page.push_str(&render_legend(legend));
    page.push_str("<table id=\"nodes\" class=\"display\" style=\"width:100%\"></table>\n");
    page.push_str(&format!(
        "<footer>{} nodes &middot; {} edges &middot; fingerprint <code>{}</code></footer>\n",
        payload.nodes.len(),
        payload.edges.len(),
        escape_html(options.fingerprint)
    ));

    page.push_str("<script>\n");
    page.push_str(&format!("const network = {};\n", script_json(payload)?));
    page.push_str(&format!("const rows = {};\n", script_json(&rows)?));
    page.push_str(
        "new vis.Network(\n\
         \x20 document.getElementById(\"network\"),\n\
         \x20 { nodes: new vis.DataSet(network.nodes), edges: new vis.DataSet(network.edges) },\n\
         \x20 { edges: { font: { size: 10, align: \"middle\" } }, physics: { stabilization: true } }\n\
         );\n",
    );
    page.push_str(&format!(
        "$(\"#nodes\").DataTable({{\n\
         \x20 data: rows,\n\
         \x20 pageLength: {},\n\
         \x20 columns: [\n\
         \x20   {{ data: \"name\", title: \"Name\" }},\n\
         \x20   {{ data: \"category\", title: \"Category\" }},\n\
         \x20   {{ data: \"definition\", title: \"Definition\", defaultContent: \"\" }},\n\
         \x20   {{ data: \"degree_centrality\", title: \"Degree Centrality\" }},\n\
         \x20   {{ data: \"closeness_centrality\", title: \"Closeness Centrality\", render: (d) => d.toFixed(4) }}\n\
         \x20 ]\n\
         }});\n",
        options.page_size.max(1)
    ));
    page.push_str("</script>\n</body>\n</html>\n");

    Ok(page)
}

fn render_legend(legend: &[CategoryStyle]) -> String {
    let mut out = String::from("<ul class=\"legend\">\n");
    for style in legend {
        out.push_str(&format!(
            "<li><span class=\"swatch\" style=\"background:{}\"></span>{} <small>({})</small></li>\n",
            escape_html(&style.color),
            escape_html(&style.category),
            escape_html(&style.shape)
        ));
    }
    out.push_str("</ul>\n");
    out
}

/// JSON safe to inline in a `<script>` element.
pub fn script_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let json = serde_json::to_string(value)?;
    Ok(json.replace("</", "<\\/").replace("<!--", "<\\!--"))
}

/// Escape text for HTML element content and attribute values.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
