//! One-off CSV to JSON converter for the bundled workforce datasets.
//!
//! Scans a directory for `*.csv` files, normalizes their headers, and writes
//! a single `workforce_data.json` next to them. Files that fail to parse are
//! reported and skipped; one bad export must not sink the rest.

use anyhow::{Context, Result};
use csv::ReaderBuilder;
use serde_json::{json, Map, Value};
use std::fs;
use std::path::{Path, PathBuf};

const OUTPUT_FILE: &str = "workforce_data.json";

fn normalize_header(raw: &str) -> String {
    raw.trim().to_lowercase().replace(' ', "_")
}

/// Numbers stay numbers in the output; everything else is a string.
fn parse_value(raw: &str) -> Value {
    let trimmed = raw.trim();
    if let Ok(int) = trimmed.parse::<i64>() {
        return json!(int);
    }
    if let Ok(float) = trimmed.parse::<f64>() {
        return json!(float);
    }
    Value::String(trimmed.to_string())
}

fn parse_rows(content: &str, delimiter: u8) -> Result<(Vec<String>, Vec<Vec<String>>)> {
    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .from_reader(content.as_bytes());

    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(normalize_header)
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.context("reading CSV record")?;
        rows.push(record.iter().map(|field| field.to_string()).collect());
    }

    Ok((headers, rows))
}

fn convert_file(path: &Path) -> Result<Value> {
    // Lossy read: some of the source exports are latin1, not UTF-8
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let content = String::from_utf8_lossy(&bytes).into_owned();

    let (headers, rows) = parse_rows(&content, b',')?;
    // A single column usually means the export is semicolon-delimited
    let (headers, rows) = if headers.len() == 1 {
        parse_rows(&content, b';')?
    } else {
        (headers, rows)
    };

    let records: Vec<Value> = rows
        .into_iter()
        .map(|row| {
            let mut object = Map::new();
            for (header, field) in headers.iter().zip(row.iter()) {
                object.insert(header.clone(), parse_value(field));
            }
            Value::Object(object)
        })
        .collect();

    Ok(Value::Array(records))
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "unnamed".to_string())
}

pub fn process_dir(dir: &Path) -> Result<PathBuf> {
    let mut files = Map::new();

    let mut csv_paths: Vec<PathBuf> = fs::read_dir(dir)
        .with_context(|| format!("listing {}", dir.display()))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().map(|ext| ext == "csv").unwrap_or(false))
        .collect();
    csv_paths.sort();

    for path in csv_paths {
        println!("Processing {}...", path.display());
        match convert_file(&path) {
            Ok(records) => {
                let count = records.as_array().map(|a| a.len()).unwrap_or(0);
                println!("  - Success: {} rows", count);
                files.insert(file_stem(&path), records);
            }
            Err(e) => {
                eprintln!("  - Error: {:#}", e);
            }
        }
    }

    let result = json!({ "files": Value::Object(files) });
    let output_path = dir.join(OUTPUT_FILE);
    fs::write(&output_path, serde_json::to_string_pretty(&result)?)
        .with_context(|| format!("writing {}", output_path.display()))?;

    Ok(output_path)
}

fn main() -> Result<()> {
    let dir = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "frontend".to_string());
    let output = process_dir(Path::new(&dir))?;
    println!("\nProcessing complete. Results saved to {}", output.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("convert_csv_{}_{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_headers_are_normalized_and_numbers_typed() {
        let dir = scratch_dir("plain");
        fs::write(
            dir.join("jobs.csv"),
            "Job Title,Open Roles,Growth Rate\nAnalyst,120,3.5\nEngineer,80,-1.25\n",
        )
        .unwrap();

        let output = process_dir(&dir).unwrap();
        let parsed: Value = serde_json::from_str(&fs::read_to_string(output).unwrap()).unwrap();

        let rows = parsed["files"]["jobs"].as_array().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["job_title"], json!("Analyst"));
        assert_eq!(rows[0]["open_roles"], json!(120));
        assert_eq!(rows[1]["growth_rate"], json!(-1.25));

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_semicolon_fallback() {
        let dir = scratch_dir("semicolon");
        fs::write(dir.join("salaries.csv"), "Industry;Avg Salary\nfinance;88000\n").unwrap();

        let output = process_dir(&dir).unwrap();
        let parsed: Value = serde_json::from_str(&fs::read_to_string(output).unwrap()).unwrap();

        let rows = parsed["files"]["salaries"].as_array().unwrap();
        assert_eq!(rows[0]["industry"], json!("finance"));
        assert_eq!(rows[0]["avg_salary"], json!(88_000));

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_bad_file_is_skipped_not_fatal() {
        let dir = scratch_dir("mixed");
        fs::write(dir.join("good.csv"), "A,B\n1,2\n").unwrap();
        fs::write(dir.join("empty.csv"), "").unwrap();

        let output = process_dir(&dir).unwrap();
        let parsed: Value = serde_json::from_str(&fs::read_to_string(output).unwrap()).unwrap();
        assert!(parsed["files"]["good"].is_array());

        let _ = fs::remove_dir_all(&dir);
    }
}
