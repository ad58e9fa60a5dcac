//! trimesh CLI - inspect the half-edge connectivity of small meshes.
//!
//! Usage: trimesh <COMMAND> [--shape <SHAPE>] [--size <N>] [--triangles <LIST>]
//!
//! Run `trimesh --help` for available commands. Set `RUST_LOG=debug` to see
//! build summaries.

use std::time::Instant;

use clap::{Args, Parser, Subcommand, ValueEnum};

use trimesh::mesh::{derive_edges, BuildOptions, TriMesh, VertexId};
use trimesh::shapes::{self, Shape};

#[derive(Parser)]
#[command(name = "trimesh")]
#[command(author, version, about = "Half-edge connectivity inspector", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Display element counts and topology
    Info {
        #[command(flatten)]
        mesh: MeshArgs,
    },

    /// List the derived undirected edges
    Edges {
        #[command(flatten)]
        mesh: MeshArgs,
    },

    /// Print one-ring neighbors
    Neighbors {
        #[command(flatten)]
        mesh: MeshArgs,

        /// Only this vertex (default: every vertex)
        #[arg(short, long)]
        vertex: Option<usize>,
    },

    /// Print boundary loops
    Boundary {
        #[command(flatten)]
        mesh: MeshArgs,
    },
}

#[derive(Args)]
struct MeshArgs {
    /// Reference shape to build
    #[arg(short, long, value_enum, default_value = "diamond")]
    shape: ShapeKind,

    /// Size parameter for fan, grid, strip and annulus shapes
    #[arg(short = 'n', long, default_value = "4")]
    size: usize,

    /// Inline triangles "i,j,k;i,j,k;..." (overrides --shape)
    #[arg(short, long)]
    triangles: Option<String>,

    /// Vertex count for --triangles (default: largest index + 1)
    #[arg(long, requires = "triangles")]
    vertices: Option<usize>,

    /// Use single-threaded execution
    #[arg(long)]
    sequential: bool,

    /// Skip input validation
    #[arg(long)]
    no_validate: bool,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum ShapeKind {
    /// Two triangles sharing an edge
    Diamond,
    /// A single triangle
    Triangle,
    /// Closed tetrahedron
    Tetrahedron,
    /// Closed octahedron
    Octahedron,
    /// Open fan of `size` triangles
    Fan,
    /// Closed fan of `size` triangles
    ClosedFan,
    /// `size` x `size` grid
    Grid,
    /// Strip of `size` triangles
    Strip,
    /// Ring of `size` quads with two boundary loops
    Annulus,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Info { mesh } => cmd_info(&mesh)?,
        Commands::Edges { mesh } => cmd_edges(&mesh)?,
        Commands::Neighbors { mesh, vertex } => cmd_neighbors(&mesh, vertex)?,
        Commands::Boundary { mesh } => cmd_boundary(&mesh)?,
    }

    Ok(())
}

impl MeshArgs {
    fn shape(&self) -> Result<Shape, Box<dyn std::error::Error>> {
        if let Some(list) = &self.triangles {
            let triangles = parse_triangles(list)?;
            let needed = triangles.iter().flatten().max().map_or(0, |&v| v + 1);
            return Ok(Shape::new(self.vertices.unwrap_or(needed), triangles));
        }

        Ok(match self.shape {
            ShapeKind::Diamond => shapes::diamond(),
            ShapeKind::Triangle => shapes::single_triangle(),
            ShapeKind::Tetrahedron => shapes::tetrahedron(),
            ShapeKind::Octahedron => shapes::octahedron(),
            ShapeKind::Fan => shapes::fan(self.size + 1, false),
            ShapeKind::ClosedFan => shapes::fan(self.size, true),
            ShapeKind::Grid => shapes::grid(self.size, self.size),
            ShapeKind::Strip => shapes::strip(self.size),
            ShapeKind::Annulus => shapes::annulus(self.size),
        })
    }

    fn options(&self) -> BuildOptions {
        BuildOptions::default()
            .with_parallel(!self.sequential)
            .with_validation(!self.no_validate)
    }

    fn build(&self) -> Result<TriMesh, Box<dyn std::error::Error>> {
        let shape = self.shape()?;
        let start = Instant::now();
        let mesh = shape.build_with_options(&self.options())?;
        log::info!(
            "Built {} triangles in {:.2?} ({})",
            shape.triangles.len(),
            start.elapsed(),
            if self.sequential { "sequential" } else { "parallel" }
        );
        Ok(mesh)
    }
}

fn parse_triangles(list: &str) -> Result<Vec<[usize; 3]>, Box<dyn std::error::Error>> {
    list.split(';')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(|t| -> Result<[usize; 3], Box<dyn std::error::Error>> {
            let indices = t
                .split(',')
                .map(|v| v.trim().parse::<usize>())
                .collect::<Result<Vec<_>, _>>()?;
            let count = indices.len();
            <[usize; 3]>::try_from(indices)
                .map_err(|_| format!("triangle \"{}\" has {} indices, expected 3", t, count).into())
        })
        .collect()
}

fn cmd_info(args: &MeshArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mesh = args.build()?;

    println!("Vertices: {}", mesh.num_vertices());
    println!("Faces: {}", mesh.num_faces());
    println!("Edges: {}", mesh.num_edges());
    println!("Half-edges: {}", mesh.num_halfedges());
    println!("Euler characteristic: {}", mesh.euler_characteristic());

    let isolated = mesh
        .vertex_ids()
        .filter(|&v| mesh.vertex_halfedge(v).is_none())
        .count();
    if isolated > 0 {
        println!("Isolated vertices: {}", isolated);
    }

    if mesh.is_closed() {
        println!("Topology: Closed (no boundary)");
    } else {
        println!(
            "Topology: Open ({} boundary vertices, {} boundary loops)",
            mesh.boundary_vertices().len(),
            mesh.boundary_loops().len()
        );
    }

    let valences: Vec<usize> = mesh.vertex_ids().map(|v| mesh.valence(v)).collect();
    if let (Some(min), Some(max)) = (valences.iter().min(), valences.iter().max()) {
        println!("Valence range: [{}, {}]", min, max);
    }

    Ok(())
}

fn cmd_edges(args: &MeshArgs) -> Result<(), Box<dyn std::error::Error>> {
    let shape = args.shape()?;
    let edges = derive_edges(&shape.triangles);

    println!("{} edges", edges.len());
    for (i, edge) in edges.iter().enumerate() {
        println!("{:>4}: {} {}", i, edge.start(), edge.end());
    }

    Ok(())
}

fn cmd_neighbors(args: &MeshArgs, vertex: Option<usize>) -> Result<(), Box<dyn std::error::Error>> {
    let mesh = args.build()?;

    let print = |v: VertexId, ring: &[VertexId]| {
        let ring: Vec<String> = ring.iter().map(|n| n.to_string()).collect();
        println!("Neighbors of vertex {}: {}", v, ring.join(" "));
    };

    match vertex {
        Some(v) => {
            let v = VertexId::try_new(v).ok_or("vertex index too large")?;
            print(v, &mesh.vv_neighbors(v)?);
        }
        None => {
            for (i, ring) in mesh.one_rings(!args.sequential).iter().enumerate() {
                print(VertexId::new(i), ring);
            }
        }
    }

    Ok(())
}

fn cmd_boundary(args: &MeshArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mesh = args.build()?;

    let loops = mesh.boundary_loops();
    if loops.is_empty() {
        println!("No boundary");
        return Ok(());
    }

    for (i, boundary) in loops.iter().enumerate() {
        let ring: Vec<String> = boundary
            .iter()
            .map(|&he| mesh.tail(he).to_string())
            .collect();
        println!("Loop {} ({} edges): {}", i, boundary.len(), ring.join(" -> "));
    }

    Ok(())
}
