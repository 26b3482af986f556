use std::fs::File;
use std::io::Error;
use std::path::Path;

pub fn generate_batch(path: &Path, rows: usize) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);

    wtr.write_record(["provider", "customer", "amount", "refund"])?;

    for i in 1..=rows {
        wtr.write_record(["stripe", &format!("cust-{i}"), "10.00", "false"])?;
    }

    wtr.flush()?;
    Ok(())
}
