//! Reading training data, writing results: thin I/O around the SOM core.

use crate::data::Matrix;
use crate::map::som::Som;
use csv::ReaderBuilder;
use std::error::Error;
use std::fs::File;
use std::io::{BufWriter, Write};

/// Reads a headerless, comma-delimited numeric file into a [`Matrix`](../data/struct.Matrix.html).
///
/// Rows are samples, columns are features. Every field must parse as `f64`;
/// ragged rows or non-numeric fields surface as errors before any training
/// can start.
pub fn read_matrix(path: &str) -> Result<Matrix<f64>, Box<dyn Error>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .delimiter(b',')
        .from_path(path)?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let rec = record?;
        let row = rec
            .iter()
            .map(|field| field.trim().parse::<f64>())
            .collect::<Result<Vec<_>, _>>()?;
        rows.push(row);
    }

    if rows.is_empty() {
        return Err(format!("No data rows in input file {}", path).into());
    }
    Ok(Matrix::from_rows(&rows))
}

/// Writes grid-cell labels to a text file, one integer per line.
pub fn write_labels(labels: &[usize], path: &str) -> Result<(), Box<dyn Error>> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    for label in labels {
        writeln!(writer, "{}", label)?;
    }
    Ok(())
}

/// Prints the trained weight planes to the console, one `x by y` block per
/// feature, separated by `---` lines.
pub fn print_weight_planes(som: &Som) {
    for plane in som.weights() {
        println!("---");
        for row in plane.iter_rows() {
            let line: Vec<String> = row.iter().map(|v| format!("{:.6}", v)).collect();
            println!("{}", line.join(" "));
        }
    }
    println!("---");
}

#[cfg(test)]
mod test {
    use crate::map::som::{seeded_rng, Som, WeightInit};
    use crate::proc::{read_matrix, write_labels};

    #[test]
    fn read_cluster_data() {
        let data = read_matrix("example_data/clusters.csv").unwrap();

        assert_eq!(data.dims(), (16, 2));
        assert_eq!(data.get_row(0)[0], 0.01);
    }

    #[test]
    fn read_missing_file() {
        assert!(read_matrix("example_data/no_such_file.csv").is_err());
    }

    #[test]
    fn write_and_read_back_labels() {
        let path = std::env::temp_dir().join("som_trainer_labels.txt");
        let path = path.to_str().unwrap().to_string();

        write_labels(&[0, 3, 1, 2], &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let values: Vec<usize> = content
            .lines()
            .map(|line| line.parse().unwrap())
            .collect();
        assert_eq!(values, vec![0, 3, 1, 2]);
    }

    #[test]
    fn cluster_round_trip() {
        let data = read_matrix("example_data/clusters.csv").unwrap();
        let mut rng = seeded_rng(1);
        let mut som = Som::new(2, 2, 2, WeightInit::Uniform, &mut rng).unwrap();

        som.train(&data, 1000, false).unwrap();
        let labels = som.assign(&data);

        assert_eq!(labels.len(), 16);
        for label in &labels {
            assert!(*label < 4);
        }
        // the four tight clusters (4 consecutive rows each) must each map
        // to a single grid cell
        for cluster in 0..4 {
            let first = labels[cluster * 4];
            for i in 1..4 {
                assert_eq!(labels[cluster * 4 + i], first);
            }
        }
        // well-separated clusters spread over more than one cell
        let mut distinct: Vec<usize> = labels.clone();
        distinct.sort();
        distinct.dedup();
        assert!(distinct.len() > 1);
    }
}
