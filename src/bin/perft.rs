use clap::Parser;
use damista::{Board, GameParams};

#[derive(Parser, Debug)]
#[command(author, version, about = "Count move-tree leaves from the starting position", long_about = None)]
struct Args {
    /// Board size (even, 2 to 26)
    #[arg(short, long, default_value_t = 8)]
    size: u8,

    #[arg(short, long, default_value_t = 4)]
    depth: u32,

    /// Quiet moves that draw the game
    #[arg(long, default_value_t = damista::params::DEFAULT_DRAW_THRESHOLD)]
    draw_threshold: u32,

    /// Print the node count below each first move
    #[arg(long)]
    divide: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let params = GameParams::new()
        .size(args.size)
        .draw_threshold(args.draw_threshold);
    let board = match Board::new(params) {
        Ok(board) => board,
        Err(e) => {
            eprintln!("invalid parameters: {}", e);
            std::process::exit(2);
        }
    };

    println!("Running perft on a {0}x{0} board at depth {1}", args.size, args.depth);
    print!("{}", board);

    let start = std::time::Instant::now();
    let nodes = if args.divide {
        let split = board.divide(args.depth);
        for (mv, n) in &split {
            println!("{}: {}", mv, n);
        }
        split.iter().map(|(_, n)| n).sum::<u64>()
    } else {
        board.perft(args.depth)
    };
    let duration = start.elapsed();

    println!(
        "perft({}) = {} nodes ({} ms, {:.2} Mnps)",
        args.depth,
        nodes,
        duration.as_millis(),
        nodes as f64 / (duration.as_micros().max(1) as f64)
    );
}
