use crate::cli::ViaArg;
use mutualdep_composite::{Composite, CompositeConfig, DependentError};
use serde_json::json;
use std::rc::Rc;

pub struct Args {
    pub value: Option<i64>,
    pub config: Option<String>,
    pub via: ViaArg,
    pub json: bool,
}

pub fn run(args: Args) {
    let composite = build_or_exit(args.value, args.config.as_deref());

    if args.json {
        print_json(&composite, args.via);
        return;
    }

    if matches!(args.via, ViaArg::Direct | ViaArg::Both) {
        composite.leaf().display();
    }
    if matches!(args.via, ViaArg::Capability | ViaArg::Both) {
        composite
            .dependent()
            .display_via_capability()
            .unwrap_or_else(|e| exit_with(e));
    }
}

fn build_or_exit(value: Option<i64>, config: Option<&str>) -> Rc<Composite> {
    match (value, config) {
        (Some(value), _) => Composite::new(value),
        (None, Some(path)) => {
            let config = CompositeConfig::load(path).unwrap_or_else(|e| {
                eprintln!("error: {e}");
                std::process::exit(1);
            });
            Composite::from_config(&config)
        }
        (None, None) => {
            eprintln!("error: provide a VALUE or --config");
            std::process::exit(1);
        }
    }
}

fn print_json(composite: &Composite, via: ViaArg) {
    let mut rendered = Vec::new();

    if matches!(via, ViaArg::Direct | ViaArg::Both) {
        rendered.push(composite.leaf().to_string());
    }
    if matches!(via, ViaArg::Capability | ViaArg::Both) {
        let line = composite
            .dependent()
            .with_leaf(|leaf| leaf.to_string())
            .unwrap_or_else(|e| exit_with(e));
        rendered.push(line);
    }

    let shared_leaf = composite
        .dependent()
        .with_leaf(|leaf| std::ptr::eq(leaf, composite.leaf()))
        .unwrap_or_else(|e| exit_with(e));

    let payload = json!({
        "value": composite.leaf().value(),
        "via": via.as_str(),
        "sharedLeaf": shared_leaf,
        "rendered": rendered,
    });
    println!(
        "{}",
        serde_json::to_string_pretty(&payload).expect("json serialization")
    );
}

fn exit_with(err: DependentError) -> ! {
    eprintln!("error: {err}");
    std::process::exit(1);
}
