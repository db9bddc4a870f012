//! isoweld CLI
//!
//! Command-line interface for field meshing.
//!
//! Author: Moroya Sakamoto

#![allow(clippy::uninlined_format_args, clippy::cast_precision_loss)]

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use isoweld::prelude::*;
#[cfg(feature = "cli")]
use std::path::{Path, PathBuf};
#[cfg(feature = "cli")]
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "isoweld")]
#[command(author = "Moroya Sakamoto")]
#[command(version = isoweld::VERSION)]
#[command(about = "isoweld: marching cubes over signed distance fields", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v: info, -vv: debug, -vvv: trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Display case-table statistics
    Info {
        /// Table JSON file (bundled table if omitted)
        #[arg(short, long)]
        table: Option<PathBuf>,
    },

    /// Mesh a built-in field and write an OBJ file
    Mesh {
        /// Field name: sphere, mandelbulb, or blend
        field: String,
        /// Output OBJ file
        #[arg(short, long)]
        output: PathBuf,
        /// Edge length of the sampled cube
        #[arg(short, long, default_value = "2.0")]
        size: f32,
        /// Subdivision count per axis
        #[arg(short, long, default_value = "32")]
        divide: u32,
        /// Animation clock for time-varying fields
        #[arg(short, long, default_value = "0.0")]
        time: f32,
        /// Build with the slab-parallel sweep
        #[arg(short, long)]
        parallel: bool,
        /// Table JSON file (bundled table if omitted)
        #[arg(long)]
        table: Option<PathBuf>,
    },

    /// Benchmark field evaluation and meshing
    Bench {
        /// Field name (mandelbulb if omitted)
        field: Option<String>,
        /// Edge length of the sampled cube
        #[arg(short, long, default_value = "3.0")]
        size: f32,
        /// Subdivision count per axis
        #[arg(short, long, default_value = "48")]
        divide: u32,
        /// Number of points for the evaluation pass
        #[arg(short, long, default_value = "1000000")]
        points: usize,
    },
}

#[cfg(feature = "cli")]
fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Info { table } => cmd_info(table),
        Commands::Mesh {
            field,
            output,
            size,
            divide,
            time,
            parallel,
            table,
        } => cmd_mesh(field, output, size, divide, time, parallel, table),
        Commands::Bench {
            field,
            size,
            divide,
            points,
        } => cmd_bench(field, size, divide, points),
    }
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI not enabled. Build with --features cli");
    std::process::exit(1);
}

/// Initialize the tracing subscriber based on verbosity level.
#[cfg(feature = "cli")]
fn init_tracing(verbose: u8) {
    // RUST_LOG wins over -v flags when set
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        let level = match verbose {
            0 => "warn",
            1 => "isoweld=info",
            2 => "isoweld=debug",
            _ => "trace",
        };
        EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .with(filter)
        .init();
}

/// Built-in demo fields by name
#[cfg(feature = "cli")]
fn demo_field(name: &str) -> Option<FieldNode> {
    match name {
        "sphere" => Some(FieldNode::sphere(0.6)),
        "mandelbulb" => Some(FieldNode::mandelbulb()),
        "blend" => Some(FieldNode::sphere(0.55).smooth_union(
            FieldNode::box3d(1.0, 0.5, 1.0).translate(0.0, -0.3, 0.0),
            0.2,
        )),
        _ => None,
    }
}

#[cfg(feature = "cli")]
fn resolve_field(name: &str) -> FieldNode {
    match demo_field(name) {
        Some(field) => field,
        None => {
            eprintln!("Unknown field: {}", name);
            eprintln!("Built-in fields: sphere, mandelbulb, blend");
            std::process::exit(1);
        }
    }
}

#[cfg(feature = "cli")]
fn cmd_info(table_path: Option<PathBuf>) {
    let loaded;
    let (table, source): (&CaseTable, String) = match table_path {
        Some(path) => {
            loaded = match CaseTable::load(&path) {
                Ok(t) => t,
                Err(e) => {
                    eprintln!("Table error: {}", e);
                    std::process::exit(1);
                }
            };
            (&loaded, path.display().to_string())
        }
        None => (CaseTable::bundled(), "bundled".to_string()),
    };

    println!("isoweld {}", isoweld::VERSION);
    println!("Table     : {}", source);
    println!("Cases     : 256 ({} populated)", table.populated_cases());
    println!(
        "Triangles : {} total, {} max per case",
        table.triangle_count(),
        table.max_triangles()
    );
}

#[cfg(feature = "cli")]
fn cmd_mesh(
    field_name: String,
    output: PathBuf,
    size: f32,
    divide: u32,
    time: f32,
    parallel: bool,
    table_path: Option<PathBuf>,
) {
    let loaded;
    let table: &CaseTable = match table_path {
        Some(path) => {
            loaded = match CaseTable::load(&path) {
                Ok(t) => t,
                Err(e) => {
                    eprintln!("Table error: {}", e);
                    std::process::exit(1);
                }
            };
            &loaded
        }
        None => CaseTable::bundled(),
    };

    let field = resolve_field(&field_name);
    let config = GridConfig::new(size, divide).with_time(time);

    println!(
        "Meshing {} at divide {} ({})...",
        field_name,
        divide,
        if parallel { "parallel" } else { "serial" }
    );

    let start = std::time::Instant::now();
    let result = if parallel {
        sdf_to_mesh_parallel(table, &field, &config)
    } else {
        sdf_to_mesh(table, &field, &config)
    };
    let mesh = match result {
        Ok(m) => m,
        Err(e) => {
            eprintln!("Mesh error: {}", e);
            std::process::exit(1);
        }
    };
    let mesh_ms = start.elapsed().as_secs_f64() * 1000.0;

    println!(
        "  {} vertices, {} triangles in {:.1}ms",
        mesh.vertex_count(),
        mesh.triangle_count(),
        mesh_ms
    );

    match write_obj(&mesh, &output) {
        Ok(_) => println!("Saved to {}", output.display()),
        Err(e) => {
            eprintln!("Write error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Write a mesh as OBJ with positions, normals and 1-based face indices
#[cfg(feature = "cli")]
fn write_obj(mesh: &Mesh, path: &Path) -> std::io::Result<()> {
    let mut obj = String::new();
    obj.push_str("# Generated by isoweld\n");
    obj.push_str(&format!("# Vertices: {}\n", mesh.vertex_count()));
    obj.push_str(&format!("# Triangles: {}\n\n", mesh.triangle_count()));

    for p in &mesh.positions {
        obj.push_str(&format!("v {} {} {}\n", p.x, p.y, p.z));
    }

    obj.push('\n');

    for n in &mesh.normals {
        obj.push_str(&format!("vn {} {} {}\n", n.x, n.y, n.z));
    }

    obj.push('\n');

    for chunk in mesh.indices.chunks_exact(3) {
        let a = chunk[0] + 1;
        let b = chunk[1] + 1;
        let c = chunk[2] + 1;
        obj.push_str(&format!("f {}//{} {}//{} {}//{}\n", a, a, b, b, c, c));
    }

    std::fs::write(path, obj)
}

#[cfg(feature = "cli")]
fn cmd_bench(field_name: Option<String>, size: f32, divide: u32, points: usize) {
    let field_name = field_name.unwrap_or_else(|| "mandelbulb".to_string());
    let field = resolve_field(&field_name);
    let table = CaseTable::bundled();
    let config = GridConfig::new(size, divide);

    println!("=== isoweld benchmark ===");
    println!("Field  : {} ({} nodes)", field_name, field.node_count());
    println!("Grid   : size {}, divide {}", size, divide);
    println!("Points : {}", points);

    // Scatter sample points through the grid volume
    let half = size * 0.5;
    let test_points: Vec<Vec3> = (0..points)
        .map(|i| {
            let t = i as f32 / points as f32;
            Vec3::new(
                (t * 1234.567).sin() * half,
                (t * 2345.678).sin() * half,
                (t * 3456.789).sin() * half,
            )
        })
        .collect();

    let start = std::time::Instant::now();
    let mut acc = 0.0f32;
    for &p in &test_points {
        acc += field.evaluate(p, 0.0);
    }
    let eval_elapsed = start.elapsed();
    std::hint::black_box(acc);

    let points_per_sec = points as f64 / eval_elapsed.as_secs_f64();
    println!("\n--------------------------------------------------");
    println!(
        "Eval       : {:.3} ms ({:.2} M points/sec)",
        eval_elapsed.as_secs_f64() * 1000.0,
        points_per_sec / 1_000_000.0
    );

    let start = std::time::Instant::now();
    let serial = match sdf_to_mesh(table, &field, &config) {
        Ok(m) => m,
        Err(e) => {
            eprintln!("Mesh error: {}", e);
            std::process::exit(1);
        }
    };
    let serial_ms = start.elapsed().as_secs_f64() * 1000.0;

    let start = std::time::Instant::now();
    let parallel = match sdf_to_mesh_parallel(table, &field, &config) {
        Ok(m) => m,
        Err(e) => {
            eprintln!("Mesh error: {}", e);
            std::process::exit(1);
        }
    };
    let parallel_ms = start.elapsed().as_secs_f64() * 1000.0;

    println!(
        "Mesh       : {:.3} ms serial, {:.3} ms parallel ({} threads)",
        serial_ms,
        parallel_ms,
        rayon::current_num_threads()
    );
    println!(
        "Output     : {} vertices, {} triangles",
        serial.vertex_count(),
        serial.triangle_count()
    );
    println!("--------------------------------------------------");
    std::hint::black_box(parallel);
}
