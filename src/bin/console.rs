//! Minimal console shell for the persona engine.
//!
//! A text-only stand-in for the graphical shell: reads lines from stdin,
//! runs them through the pipeline, and prints the reply with its
//! expression tag. `/stats`, `/clear`, and `/quit` are handled locally.

use anyhow::Context;
use bourguiba::classifier::ClassifierArtifact;
use bourguiba::config::PersonaConfig;
use bourguiba::gallery::ExpressionGallery;
use bourguiba::session::PersonaEngine;
use std::io::{BufRead, Write};
use tracing::info;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    if let Err(e) = run() {
        eprintln!("bourguiba-console failed: {e}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let config_path = PersonaConfig::default_config_path();
    let config = if config_path.exists() {
        PersonaConfig::from_file(&config_path)
            .with_context(|| format!("loading {}", config_path.display()))?
    } else {
        PersonaConfig::default()
    };

    let classifier = ClassifierArtifact::load(&config.artifacts);
    if !classifier.is_trained() {
        println!("[!] Modèle ML: Mode secours (artefact non chargé)");
    }
    let gallery = ExpressionGallery::new(&config.gallery);
    let mut engine = PersonaEngine::new(classifier);

    let welcome = engine.welcome();
    println!("{}", welcome.display_text);
    info!("console shell ready");

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        match input {
            "/quit" => break,
            "/clear" => {
                engine.clear_history();
                println!("(conversation effacée)");
            }
            "/stats" => {
                let stats = engine.stats();
                println!(
                    "Modèle: {} | Messages: {} | Dernière prédiction: {} ({:.2})",
                    if stats.trained { "Actif" } else { "Mode secours" },
                    stats.messages,
                    stats.last_label.as_deref().unwrap_or("aucune"),
                    stats.last_confidence.unwrap_or(0.0),
                );
            }
            text => {
                let reply = engine.submit(text);
                println!("{}", reply.display_text);
                println!("  [expression: {} → {:?}]", reply.expression, gallery.resolve(reply.expression));
            }
        }
    }

    Ok(())
}
