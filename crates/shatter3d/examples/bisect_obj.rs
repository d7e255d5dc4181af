//! Command-line bisection of a Wavefront OBJ mesh.
//!
//! Usage:
//!
//! ```text
//! bisect_obj <input.obj> <px> <py> <pz> <nx> <ny> <nz> [--no-fill]
//! ```
//!
//! Splits the mesh by the plane passing through `(px, py, pz)` with normal
//! `(nx, ny, nz)` and writes `<input>_positive.obj` / `<input>_negative.obj`
//! for each side that survived the cut.

use shatter3d::math::{Point, Real, Vector};
use shatter3d::query::bisect::{bisect, BisectOptions};
use shatter3d::shape::{TriMesh, TriMeshFlags};
use std::path::PathBuf;
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("bisect_obj: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), String> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 8 {
        return Err(
            "usage: bisect_obj <input.obj> <px> <py> <pz> <nx> <ny> <nz> [--no-fill]".to_string(),
        );
    }

    let input = PathBuf::from(&args[1]);
    let mut coords: [Real; 6] = [0.0; 6];
    for (i, arg) in args[2..8].iter().enumerate() {
        coords[i] = arg
            .parse()
            .map_err(|_| format!("invalid number {arg:?}"))?;
    }
    let fill_holes = !args[8..].iter().any(|arg| arg == "--no-fill");

    let mesh = TriMesh::from_obj_file(&input, TriMeshFlags::MERGE_DUPLICATE_VERTICES)
        .map_err(|err| err.to_string())?;
    let result = bisect(
        &mesh,
        &Point::new(coords[0], coords[1], coords[2]),
        &Vector::new(coords[3], coords[4], coords[5]),
        BisectOptions {
            fill_holes,
            ..Default::default()
        },
    )
    .map_err(|err| err.to_string())?;

    let stem = input
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("fragment");

    for (fragment, side) in [(&result.positive, "positive"), (&result.negative, "negative")] {
        if let Some(fragment) = fragment {
            let path = input.with_file_name(format!("{stem}_{side}.obj"));
            fragment
                .mesh
                .to_obj_file(&path)
                .map_err(|err| err.to_string())?;
            println!(
                "{}: {} vertices, {} triangles, offset {:?}, impulse {:?}",
                path.display(),
                fragment.mesh.vertices().len(),
                fragment.mesh.num_triangles(),
                fragment.offset,
                fragment.impulse,
            );
        } else {
            println!("{side} side: degenerate, nothing written");
        }
    }

    Ok(())
}
