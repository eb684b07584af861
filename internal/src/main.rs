// © 2023-2024 ETH Zurich
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// any later version.
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
// You should have received a copy of the GNU General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

use std::fs::{self, File};
use std::io::Read;
use std::path::Path;

use tracing::{error, info};

fn main() {
    server::logger::init_logger();
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        println!("Usage: {} <input_file>", args[0]);
        std::process::exit(1)
    }
    let path = &args[1];

    if let Err(message) = run(path) {
        error!("{}", message);
        std::process::exit(1)
    }
    std::process::exit(0)
}

fn run(path: &str) -> Result<(), String> {
    let mut file = File::open(path).map_err(|err| format!("cannot open {}: {}", path, err))?;
    let mut input_data = String::new();
    file.read_to_string(&mut input_data)
        .map_err(|err| format!("cannot read {}: {}", path, err))?;
    let input_data: serde_json::Value =
        serde_json::from_str(&input_data).map_err(|err| format!("invalid json: {}", err))?;
    info!("---------- RUN: {} ----------", path);

    let output = server::solve_instance(input_data).map_err(|err| err.to_string())?;

    // output path with sub-directory creation
    let output_dir_name = "output";
    let output_path = ensure_output_path(path, output_dir_name)?;
    let file = File::create(&output_path)
        .map_err(|err| format!("cannot create {}: {}", output_path, err))?;
    serde_json::to_writer_pretty(file, &output)
        .map_err(|err| format!("cannot write {}: {}", output_path, err))?;
    info!("output written to {}", output_path);
    Ok(())
}

fn ensure_output_path(input_path: &str, output_dir_name: &str) -> Result<String, String> {
    let file_name = Path::new(input_path)
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| format!("no file name in {}", input_path))?;
    let output_path = format!("{}/output_{}", output_dir_name, file_name);
    if let Some(parent_dir) = Path::new(&output_path).parent() {
        fs::create_dir_all(parent_dir)
            .map_err(|err| format!("cannot create {}: {}", parent_dir.display(), err))?;
    }
    Ok(output_path)
}
