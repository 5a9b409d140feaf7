//! CLI command implementations.
//!
//! Every query command takes an already loaded graph and writes to `out`,
//! so the same code serves stdout and the tests. Tree and vertex lines are
//! never colored: their text is the output contract.

use crate::config::Config;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::io::Write;
use std::path::Path;
use std::time::Duration;
use tangle_graph::{export as graph_export, DegreeKind, TangleGraph};
use tracing::info;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Write a default config file.
pub fn init(path: Option<&Path>, force: bool, out: &mut impl Write) -> Result<()> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => Config::default_path().ok_or("no config directory on this platform")?,
    };

    if path.exists() && !force {
        writeln!(out, "{} Already initialized ({})", "✓".green(), path.display())?;
        return Ok(());
    }

    Config::default().save(&path)?;
    writeln!(out, "{} Wrote {}", "✓".green(), path.display())?;

    Ok(())
}

/// Load a DOT file and build the graph.
pub fn load_graph(path: &Path) -> Result<TangleGraph> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}")?);
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner.set_message(format!("Loading {}...", path.display()));

    let loaded: Result<TangleGraph> = tangle_core::load_file(path)
        .map_err(Into::into)
        .and_then(|desc| TangleGraph::from_description(&desc).map_err(Into::into));

    spinner.finish_and_clear();

    let graph = loaded?;
    info!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "loaded {}",
        path.display()
    );
    Ok(graph)
}

/// Print a single vertex line.
pub fn vertex(graph: &TangleGraph, token: &str, out: &mut impl Write) -> Result<()> {
    let index = graph.resolve_vertex(token)?;
    writeln!(out, "{}", graph.vertex_line(index)?)?;
    Ok(())
}

/// Print a vertex and its children as a tree.
pub fn children(graph: &TangleGraph, token: &str, depth: usize, out: &mut impl Write) -> Result<()> {
    let index = graph.resolve_vertex(token)?;
    for line in graph.render_tree(index, depth)? {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

/// List vertices whose value starts with `query`.
pub fn search(graph: &TangleGraph, query: &str, out: &mut impl Write) -> Result<()> {
    let matches = graph.search(query);

    if matches.is_empty() {
        writeln!(out, "No vertices match \"{}\"", query)?;
        return Ok(());
    }

    for vertex in matches {
        writeln!(out, "{}", vertex)?;
    }
    Ok(())
}

/// Print the highest-degree vertices.
pub fn hotspots(
    graph: &TangleGraph,
    incoming: bool,
    limit: usize,
    out: &mut impl Write,
) -> Result<()> {
    let kind = if incoming {
        DegreeKind::In
    } else {
        DegreeKind::Out
    };

    writeln!(
        out,
        "{}",
        format!("Top {} by {}-degree", limit, kind).cyan().bold()
    )?;
    for (rank, index) in graph.top_by_degree(kind, limit).into_iter().enumerate() {
        writeln!(out, "{:>3}. {}", rank + 1, graph.vertex_line(index)?)?;
    }
    Ok(())
}

/// List descendants shared by two vertices.
pub fn shared(graph: &TangleGraph, a: &str, b: &str, out: &mut impl Write) -> Result<()> {
    let a = graph.resolve_vertex(a)?;
    let b = graph.resolve_vertex(b)?;

    let shared = graph.shared_descendants(a, b)?;
    if shared.is_empty() {
        writeln!(out, "No shared descendants")?;
        return Ok(());
    }

    for vertex in shared {
        writeln!(out, "{}", vertex)?;
    }
    Ok(())
}

/// List every vertex reachable from a vertex.
pub fn reach(graph: &TangleGraph, token: &str, out: &mut impl Write) -> Result<()> {
    let start = graph.resolve_vertex(token)?;
    for index in graph.collect_reachable(start)? {
        writeln!(out, "{}", graph.vertex_line(index)?)?;
    }
    Ok(())
}

/// Report whether one of the values reaches all the others.
pub fn connected(graph: &TangleGraph, values: &[String], out: &mut impl Write) -> Result<()> {
    if graph.connected(values)? {
        writeln!(out, "{} connected", "✓".green())?;
    } else {
        writeln!(out, "{} not connected", "✗".red())?;
    }
    Ok(())
}

/// Print canonical indexes for the tokens, space separated.
pub fn resolve(graph: &TangleGraph, tokens: &[String], out: &mut impl Write) -> Result<()> {
    let resolved = graph.resolve_tokens(tokens)?;
    writeln!(out, "{}", resolved.join(" "))?;
    Ok(())
}

/// Write the reachable subgraph of a vertex as DOT.
pub fn subgraph(
    graph: &TangleGraph,
    token: &str,
    output: Option<&Path>,
    out: &mut impl Write,
) -> Result<()> {
    let start = graph.resolve_vertex(token)?;
    let dot = graph_export::reachable_subgraph_dot(graph, start)?;
    write_or_print(&dot, output, out)
}

/// Export the graph to JSON.
pub fn export(graph: &TangleGraph, output: Option<&Path>, out: &mut impl Write) -> Result<()> {
    let snapshot = graph_export::snapshot(graph);
    let json = serde_json::to_string_pretty(&snapshot)?;
    write_or_print(&json, output, out)
}

/// Show graph statistics.
pub fn stats(graph: &TangleGraph, out: &mut impl Write) -> Result<()> {
    let stats = graph.stats();

    writeln!(out, "{}", "Graph Statistics".cyan().bold())?;
    writeln!(out)?;
    writeln!(out, "  {} {}", "Vertices:".dimmed(), stats.vertex_count)?;
    writeln!(out, "  {} {}", "Edges:".dimmed(), stats.edge_count)?;
    writeln!(out, "  {} {}", "Self-loops:".dimmed(), stats.self_loops)?;
    writeln!(out, "  {} {}", "Distinct values:".dimmed(), stats.distinct_values)?;

    Ok(())
}

fn write_or_print(text: &str, output: Option<&Path>, out: &mut impl Write) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, text)?;
            info!("wrote {}", path.display());
        }
        None => {
            out.write_all(text.as_bytes())?;
            if !text.ends_with('\n') {
                writeln!(out)?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::{tempdir, NamedTempFile};

    const SAMPLE_DOT: &str = "\
digraph test02 {
    v00; v01; v02; v03; v04; v05;
    v06; v07; v08; v09; v10; v11;

    v00 -> v01;
    v00 -> v02;
    v01 -> v02;
    v01 -> v03;
    v01 -> v04;
    v02 -> v05;
    v03 -> v06;
    v03 -> v07;
    v04 -> v07;
    v04 -> v08;
    v04 -> v09;
    v05 -> v10;
    v05 -> v11;
    v06 -> v06;
    v08 -> v06;
    v10 -> v09;
    v11 -> v06;
}
";

    fn sample_graph() -> TangleGraph {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(SAMPLE_DOT.as_bytes()).unwrap();
        load_graph(file.path()).unwrap()
    }

    fn run<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> Result<()>,
    {
        colored::control::set_override(false);
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_vertex_by_index_and_value() {
        let graph = sample_graph();

        assert_eq!(
            run(|out| vertex(&graph, "0", out)),
            "vtx[0] in: 0 out: 2 val: v00\n"
        );
        assert_eq!(
            run(|out| vertex(&graph, "v00", out)),
            "vtx[0] in: 0 out: 2 val: v00\n"
        );
    }

    #[test]
    fn test_children_output() {
        let graph = sample_graph();
        let output = run(|out| children(&graph, "1", 3, out));

        let expected = "\
vtx[1] in: 1 out: 3 val: v01
├─ vtx[2] in: 2 out: 1 val: v02
│  └─ vtx[5] in: 1 out: 2 val: v05
│     ├─ vtx[10] in: 1 out: 1 val: v10
│     └─ vtx[11] in: 1 out: 1 val: v11
├─ vtx[3] in: 1 out: 2 val: v03
│  ├─ vtx[6] in: 4 out: 1 val: v06
│  │  └● vtx[6] in: 4 out: 1 val: v06
│  └─ vtx[7] in: 2 out: 0 val: v07
└─ vtx[4] in: 1 out: 3 val: v04
   ├─ vtx[7] in: 2 out: 0 val: v07
   ├─ vtx[8] in: 1 out: 1 val: v08
   │  └─ vtx[6] in: 4 out: 1 val: v06
   └─ vtx[9] in: 2 out: 0 val: v09
";
        assert_eq!(output, expected);
    }

    #[test]
    fn test_search_output() {
        let graph = sample_graph();

        assert_eq!(
            run(|out| search(&graph, "v1", out)),
            "vtx[10] in: 1 out: 1 val: v10\nvtx[11] in: 1 out: 1 val: v11\n"
        );
        assert_eq!(
            run(|out| search(&graph, "hutzlpfrt", out)),
            "No vertices match \"hutzlpfrt\"\n"
        );
    }

    #[test]
    fn test_hotspots_output() {
        let graph = sample_graph();
        let output = run(|out| hotspots(&graph, true, 2, out));

        assert_eq!(
            output,
            "Top 2 by in-degree\n  1. vtx[6] in: 4 out: 1 val: v06\n  2. vtx[2] in: 2 out: 1 val: v02\n"
        );
    }

    #[test]
    fn test_shared_and_reach() {
        let graph = sample_graph();

        assert_eq!(
            run(|out| shared(&graph, "v03", "4", out)),
            "vtx[6] in: 4 out: 1 val: v06\nvtx[7] in: 2 out: 0 val: v07\n"
        );
        assert_eq!(run(|out| shared(&graph, "7", "9", out)), "No shared descendants\n");
        assert_eq!(run(|out| reach(&graph, "v07", out)).lines().count(), 1);
        assert_eq!(run(|out| reach(&graph, "v04", out)).lines().count(), 5);
    }

    #[test]
    fn test_connected_output() {
        let graph = sample_graph();
        let values = |v: &[&str]| v.iter().map(|s| s.to_string()).collect::<Vec<_>>();

        assert_eq!(
            run(|out| connected(&graph, &values(&["v10", "v03", "v00"]), out)),
            "✓ connected\n"
        );
        assert_eq!(
            run(|out| connected(&graph, &values(&["v10", "v03"]), out)),
            "✗ not connected\n"
        );
    }

    #[test]
    fn test_resolve_output() {
        let graph = sample_graph();
        let tokens: Vec<String> = ["6", "v07", ".v02"].iter().map(|s| s.to_string()).collect();

        assert_eq!(run(|out| resolve(&graph, &tokens, out)), "6 7 2\n");
    }

    #[test]
    fn test_unknown_value_is_error() {
        let graph = sample_graph();
        let mut out = Vec::new();

        let err = vertex(&graph, "ghost", &mut out).unwrap_err();
        assert_eq!(err.to_string(), "no vertex with value 'ghost'");
        assert!(out.is_empty());
    }

    #[test]
    fn test_subgraph_to_file() {
        let graph = sample_graph();
        let dir = tempdir().unwrap();
        let path = dir.path().join("sub.dot");

        let printed = run(|out| subgraph(&graph, "v08", Some(&path), out));
        assert!(printed.is_empty());

        let desc = tangle_core::load_file(&path).unwrap();
        assert_eq!(desc.vertices, vec!["v06", "v08"]);
        assert_eq!(desc.edges, vec![(0, 0), (1, 0)]);
    }

    #[test]
    fn test_export_json() {
        let graph = sample_graph();
        let output = run(|out| export(&graph, None, out));

        let json: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(json["stats"]["vertex_count"], 12);
        assert_eq!(json["edges"].as_array().unwrap().len(), 17);
    }

    #[test]
    fn test_stats_output() {
        let graph = sample_graph();
        let output = run(|out| stats(&graph, out));

        assert!(output.contains("Vertices: 12"));
        assert!(output.contains("Edges: 17"));
        assert!(output.contains("Self-loops: 1"));
    }

    #[test]
    fn test_init_writes_once() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tangle").join("config.json");

        let first = run(|out| init(Some(&path), false, out));
        assert!(first.contains("Wrote"));
        assert_eq!(Config::load_from(&path).unwrap(), Config::default());

        let second = run(|out| init(Some(&path), false, out));
        assert!(second.contains("Already initialized"));
    }

    #[test]
    fn test_load_invalid_graph() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"digraph { a -> }").unwrap();

        assert!(load_graph(file.path()).is_err());
    }
}
