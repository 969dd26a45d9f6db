use crate::dataset::Dataset;
use nn::tensor::SHAPE;
use nn::PositionTensor;
use npyz::WriterBuilder;
use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter};
use std::path::Path;

pub const FEATURES_FILE: &str = "features.npy";
pub const LABELS_FILE: &str = "labels.npy";

/// Writes `features.npy` (int8, [N, 12, 8, 8]) and `labels.npy` (int8, [N]) into `dir`
pub fn write_dataset<P: AsRef<Path>>(dataset: &Dataset, dir: P) -> io::Result<()> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir)?;

    let n = dataset.len() as u64;
    let features_shape = [n, SHAPE[0] as u64, SHAPE[1] as u64, SHAPE[2] as u64];

    write_array(
        &dir.join(FEATURES_FILE),
        &features_shape,
        dataset
            .features
            .iter()
            .flat_map(|tensor| tensor.as_slice().iter().copied()),
    )?;
    write_array(&dir.join(LABELS_FILE), &[n], dataset.labels.iter().copied())
}

fn write_array<I>(path: &Path, shape: &[u64], values: I) -> io::Result<()>
where
    I: IntoIterator<Item = i8>,
{
    let file = File::create(path)?;
    let mut writer = npyz::WriteOptions::new()
        .default_dtype()
        .shape(shape)
        .writer(BufWriter::new(file))
        .begin_nd()?;

    writer.extend(values)?;
    writer.finish()
}

/// Loads a dataset written by [`write_dataset`]
pub fn read_dataset<P: AsRef<Path>>(dir: P) -> io::Result<Dataset> {
    let dir = dir.as_ref();

    let (features_shape, features) = read_array(&dir.join(FEATURES_FILE))?;
    let (labels_shape, labels) = read_array(&dir.join(LABELS_FILE))?;

    let n = labels.len() as u64;
    let expected = [n, SHAPE[0] as u64, SHAPE[1] as u64, SHAPE[2] as u64];
    if labels_shape != [n] || features_shape != expected {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!(
                "unexpected dataset shapes: features {:?}, labels {:?}",
                features_shape, labels_shape
            ),
        ));
    }

    let features = features
        .chunks_exact(SHAPE.iter().product())
        .filter_map(PositionTensor::from_slice)
        .collect();

    Ok(Dataset { features, labels })
}

fn read_array(path: &Path) -> io::Result<(Vec<u64>, Vec<i8>)> {
    let npy = npyz::NpyFile::new(BufReader::new(File::open(path)?))?;
    let shape = npy.shape().to_vec();

    Ok((shape, npy.into_vec::<i8>()?))
}
