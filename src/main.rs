use alchemo::{
    allocate::{self, QualityBudget},
    compute,
    data::Quality,
    inventory::Inventory,
};
use clap::Parser;
use rand::{rngs::StdRng, SeedableRng};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command()]
struct Args {
    #[arg(long)]
    brew: bool,
    #[arg(long)]
    gather: Option<u32>,
    #[arg(long)]
    optimize: bool,
    #[arg(long)]
    fund: Option<u32>,
    #[arg(long)]
    render: bool,
    #[arg(long)]
    svg: Option<PathBuf>,
    #[arg(long)]
    total: bool,
    #[arg(long)]
    out: bool,
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let graph = alchemo::standard_graph();
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    if args.render {
        print!("{}", compute::render(&graph)?);
    }
    if let Some(out) = &args.svg {
        compute::render_svg(&graph, out)?;
        eprintln!("Wrote {}", out.display());
    }
    if args.total {
        let mut total: Vec<_> = compute::total(&graph).into_iter().collect();
        total.sort_unstable();
        for (name, quantity) in total {
            println!("{quantity} {name}");
        }
    }
    if args.out {
        println!("{}", serde_json::to_string_pretty(&graph.graph)?);
    }
    if args.brew {
        let (potion, ingredients) = graph.pick(&mut rng);
        println!("Brewing a {}...", potion.kind);
        println!("Generated potion ingredients:");
        for ingredient in &ingredients {
            println!("- {ingredient}");
        }
    }
    let mut inventory = Inventory::new();
    if let Some(count) = args.gather {
        for _ in 0..count {
            let ingredient = inventory.generate(&mut rng);
            println!("Generated ingredient: {ingredient}");
        }
        println!("Inventory:");
        for (name, count) in inventory.report() {
            println!("- {name}: {count}");
        }
    }
    if args.optimize {
        let mut budget = QualityBudget::new();
        if let Some(amount) = args.fund {
            for quality in Quality::ALL {
                budget.fund(quality, amount);
            }
        }
        let potions = allocate::allocate(&graph, &mut inventory, &mut budget, &mut rng);
        println!("Optimized potion creation:");
        for potion in &potions {
            println!("- {} (power {})", potion.kind, potion.power());
        }
        if args.gather.is_some() {
            println!("Remaining inventory:");
            for (name, count) in inventory.report() {
                println!("- {name}: {count}");
            }
        }
    }
    Ok(())
}
