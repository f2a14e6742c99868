use clap::Parser;
use small_cart::adapters::{ConsoleInput, ConsolePrompt};
use small_cart::core::session::{self, Command, Flow};
use small_cart::core::KeyValueStore;
use small_cart::utils::{logger, validation::Validate};
use small_cart::{
    AppConfig, CartPersistence, CartStore, Catalog, CliArgs, FileStore, MemoryStore, ShopApp,
    StorageBackend, TerminalSurface, ToastNotifier,
};
use std::sync::Arc;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    // 初始化日誌
    if args.log_json {
        logger::init_json_logger(args.verbose);
    } else {
        logger::init_cli_logger(args.verbose);
    }

    tracing::info!("🚀 Starting small-cart");
    if args.verbose {
        tracing::debug!("CLI args: {:?}", args);
    }

    // 載入並驗證配置
    let config = match args.load_config().and_then(|config| {
        config.validate()?;
        Ok(config)
    }) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    let catalog = Arc::new(config.catalog()?);
    let input = ConsoleInput::stdin();

    match config.storage.backend {
        StorageBackend::File => {
            tracing::info!("💾 Cart stored under {}", config.storage.path);
            let store = FileStore::new(&config.storage.path);
            run(store, &config, catalog, input, args.yes).await
        }
        StorageBackend::Memory => {
            tracing::info!("💾 Cart kept in memory for this session");
            run(MemoryStore::new(), &config, catalog, input, args.yes).await
        }
    }
}

async fn run<K: KeyValueStore>(
    store: K,
    config: &AppConfig,
    catalog: Arc<Catalog>,
    input: ConsoleInput,
    assume_yes: bool,
) -> anyhow::Result<()> {
    let persistence = CartPersistence::new(store, config.storage.key.clone());
    let cart = CartStore::open(catalog, persistence).await;

    let mut app = ShopApp::new(
        cart,
        TerminalSurface::stdout(&config.display.currency),
        ToastNotifier::new(config.notification_timeout()),
        ConsolePrompt::new(input.clone(), assume_yes),
    );
    app.start();
    println!("Type 'help' for commands.");

    while let Some(line) = input.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                println!("{}", e.user_friendly_message());
                continue;
            }
        };

        match session::execute(&mut app, command).await {
            Flow::Continue => {}
            Flow::Notice(text) => println!("{}", text),
            Flow::Quit => break,
        }
    }

    tracing::info!(
        "👋 Session ended with {} cart line(s), total {}",
        app.store().lines().len(),
        app.store().calculate_total()
    );
    Ok(())
}
