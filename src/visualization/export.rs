use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::types::TrajectoryPoint;

/// Export a trajectory to CSV format
pub fn export_trajectory_csv<P: AsRef<Path>>(trajectory: &[TrajectoryPoint], path: P) -> Result<()> {
    let mut file = std::fs::File::create(path)?;

    writeln!(file, "index,x,y")?;
    for (i, point) in trajectory.iter().enumerate() {
        writeln!(file, "{},{},{}", i, point.x, point.y)?;
    }

    Ok(())
}

/// Export a trajectory in JSON format
pub fn export_trajectory_json<P: AsRef<Path>>(trajectory: &[TrajectoryPoint], path: P) -> Result<()> {
    let json = serde_json::to_string_pretty(trajectory)?;
    std::fs::write(path, json)?;
    Ok(())
}
