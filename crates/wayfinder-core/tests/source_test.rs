use anyhow::Result;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;
use wayfinder_config::{DataConfig, SourceKind};
use wayfinder_core::{open_source, CsvSource, DataError, DataSource, JsonSource};

fn write(dir: &TempDir, name: &str, content: &str) -> Result<PathBuf> {
    let path = dir.path().join(name);
    fs::write(&path, content)?;
    Ok(path)
}

#[test]
fn csv_source_reads_optional_columns() -> Result<()> {
    let dir = TempDir::new()?;
    let nodes = write(
        &dir,
        "nodes.csv",
        "id,x,y,floor,type,label,person\n\
         r101,10,20,1,room,Room 101,Ivanova\n\
         s1,15.5,20,1,staircase,,\n\
         j1,12,22,1,,,\n",
    )?;
    let edges = write(&dir, "edges.csv", "from,to,weight\nr101,j1,7\nj1,s1,3.5\n")?;

    let dataset = CsvSource::new(nodes, edges).load()?;

    assert_eq!(dataset.nodes.len(), 3);
    assert_eq!(dataset.nodes[0].label.as_deref(), Some("Room 101"));
    assert_eq!(dataset.nodes[0].person.as_deref(), Some("Ivanova"));
    assert_eq!(dataset.nodes[1].node_type.as_deref(), Some("staircase"));
    assert_eq!(dataset.nodes[1].label, None);
    assert_eq!(dataset.nodes[2].node_type, None);
    assert_eq!(dataset.edges[1].weight, 3.5);
    Ok(())
}

#[test]
fn csv_source_tolerates_missing_person_column() -> Result<()> {
    let dir = TempDir::new()?;
    let nodes = write(&dir, "nodes.csv", "id,x,y,floor,type,label\na,0,0,2,room,A\n")?;
    let edges = write(&dir, "edges.csv", "from,to,weight\n")?;

    let dataset = CsvSource::new(nodes, edges).load()?;
    assert_eq!(dataset.nodes[0].floor, 2);
    assert_eq!(dataset.nodes[0].person, None);
    assert!(dataset.edges.is_empty());
    Ok(())
}

#[test]
fn missing_table_is_an_io_error() {
    let dir = TempDir::new().unwrap();
    let source = CsvSource::new(dir.path().join("nodes.csv"), dir.path().join("edges.csv"));
    assert!(matches!(source.load(), Err(DataError::Io { .. })));
}

#[test]
fn malformed_weight_is_a_csv_error() -> Result<()> {
    let dir = TempDir::new()?;
    let nodes = write(&dir, "nodes.csv", "id,x,y,floor\na,0,0,1\n")?;
    let edges = write(&dir, "edges.csv", "from,to,weight\na,a,heavy\n")?;
    let result = CsvSource::new(nodes, edges).load();
    assert!(matches!(result, Err(DataError::Csv { .. })));
    Ok(())
}

#[test]
fn json_source_through_config() -> Result<()> {
    let dir = TempDir::new()?;
    let path = write(
        &dir,
        "building.json",
        r#"{
            "nodes": [
                {"id": "a", "x": 0, "y": 0, "floor": 1, "type": "elevator", "label": null},
                {"id": "b", "x": 5, "y": 0, "floor": 2}
            ],
            "edges": [{"from": "a", "to": "b", "weight": "4"}]
        }"#,
    )?;

    let config = DataConfig {
        source: SourceKind::Json,
        path,
        ..Default::default()
    };
    let source = open_source(&config);
    assert!(source.describe().starts_with("json:"));

    let dataset = source.load()?;
    assert_eq!(dataset.nodes[0].node_type.as_deref(), Some("elevator"));
    assert_eq!(dataset.edges[0].weight, 4.0);
    Ok(())
}

#[test]
fn truncated_json_is_a_json_error() -> Result<()> {
    let dir = TempDir::new()?;
    let path = write(&dir, "broken.json", r#"{"nodes": ["#)?;
    assert!(matches!(
        JsonSource::new(path).load(),
        Err(DataError::Json { .. })
    ));
    Ok(())
}

#[test]
fn csv_delimiter_from_config() -> Result<()> {
    let dir = TempDir::new()?;
    write(
        &dir,
        "nodes.csv",
        "id;x;y;floor;type;label;person\n\
         r1;1.5;0;1;room;Room 1;\n\
         r2;4;0;1;room;Room 2;Petrova\n",
    )?;
    write(&dir, "edges.csv", "from;to;weight\nr1;r2;2.5\n")?;

    let config = DataConfig {
        path: dir.path().to_path_buf(),
        delimiter: ';',
        ..Default::default()
    };
    let source = open_source(&config);
    assert!(source.describe().ends_with("(delimiter ';')"));

    let dataset = source.load()?;
    assert_eq!(dataset.nodes.len(), 2);
    assert_eq!(dataset.nodes[1].person.as_deref(), Some("Petrova"));

    // With commas the header is one unknown column
    let comma = DataConfig {
        delimiter: ',',
        ..config
    };
    assert!(open_source(&comma).load().is_err());
    Ok(())
}
