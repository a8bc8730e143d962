//! Podcastr - browse and play podcast episodes from the terminal
use clap::{Parser, Subcommand};
use podcastr::{
    build_repository,
    config::AppConfig,
    render::{render_episode, render_home, render_player},
    EpisodeDetailView, HeadlessMedia, HomeView, PlayerCommand,
};
use podcastr_core::{Episode, EpisodeId};
use podcastr_playback::{PlayerConfig, PlayerContext, PlayerSurface};
use std::path::PathBuf;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "podcastr")]
#[command(about = "Browse and play Podcastr episodes", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Episode API base URL
    #[arg(long, env = "PODCASTR_API_URL", global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the home page
    Home,
    /// Show one episode
    Episode {
        /// Episode ID
        id: String,
    },
    /// Play the home page, starting at a row
    Play {
        /// Row number shown by `home`
        #[arg(short, long, default_value_t = 0, conflicts_with = "id")]
        index: usize,
        /// Start at the home page row with this episode ID instead
        #[arg(long)]
        id: Option<String>,
        #[command(flatten)]
        player: PlayerArgs,
    },
    /// Play a single episode
    PlayEpisode {
        /// Episode ID
        id: String,
        #[command(flatten)]
        player: PlayerArgs,
    },
}

#[derive(clap::Args)]
struct PlayerArgs {
    /// Start in shuffle mode
    #[arg(long)]
    shuffle: bool,

    /// Start in loop mode
    #[arg(long = "loop")]
    looping: bool,

    /// Clock speed multiplier
    #[arg(long, default_value_t = 1.0)]
    speed: f64,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let mut config = AppConfig::load(cli.config.as_deref())?;
    if let Some(url) = cli.api_url {
        config.api.url = url;
    }
    config.validate()?;

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log.filter.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::debug!(api = %config.api.url, "Configuration loaded");

    let repository = build_repository(&config)?;

    match cli.command {
        Commands::Home => {
            let view = HomeView::load(&repository, &config.home).await?;
            print!("{}", render_home(&view));
        }
        Commands::Episode { id } => {
            let view = EpisodeDetailView::load(&repository, &EpisodeId::new(id)).await?;
            print!("{}", render_episode(&view));
        }
        Commands::Play { index, id, player } => {
            let view = HomeView::load(&repository, &config.home).await?;
            let context = player_context(&player);
            match id {
                Some(id) => view.play_episode(&context, &EpisodeId::new(id))?,
                None => view.play(&context, index)?,
            }
            run_player(context, view.queue(), &player, config.tick()).await?;
        }
        Commands::PlayEpisode { id, player } => {
            let view = EpisodeDetailView::load(&repository, &EpisodeId::new(id)).await?;
            let context = player_context(&player);
            view.play(&context);
            run_player(context, std::slice::from_ref(view.episode()), &player, config.tick())
                .await?;
        }
    }

    Ok(())
}

fn player_context(args: &PlayerArgs) -> PlayerContext {
    PlayerContext::new(PlayerConfig {
        looping: args.looping,
        shuffling: args.shuffle,
        seed: None,
    })
}

/// Drive the player surface until the queue ends or the listener quits
async fn run_player(
    context: PlayerContext,
    queue: &[Episode],
    args: &PlayerArgs,
    tick: Duration,
) -> anyhow::Result<()> {
    let mut media = HeadlessMedia::new(args.speed);
    media.register_all(queue);

    let mut surface = PlayerSurface::new(context, media);
    surface.sync();

    println!("Commands: p(lay/pause) n(ext) b(ack) s(huffle) l(oop) seek <time> q(uit)");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut input_open = true;
    let mut interval = tokio::time::interval(tick);
    let mut last_title: Option<String> = None;
    let mut last_second = u64::MAX;

    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    loop {
        tokio::select! {
            _ = interval.tick() => {
                for event in surface.media_mut().tick(tick) {
                    surface.handle_media_event(event);
                }
            }
            line = lines.next_line(), if input_open => {
                match line? {
                    Some(line) => match PlayerCommand::parse(&line) {
                        Some(command) => {
                            if !command.apply(&mut surface) {
                                break;
                            }
                            last_second = u64::MAX;
                        }
                        None => println!("Unknown command: {}", line.trim()),
                    },
                    None => input_open = false,
                }
            }
            _ = &mut ctrl_c => {
                break;
            }
        }

        let view = surface.view();
        let Some(now_playing) = &view.now_playing else {
            println!("Queue finished");
            break;
        };

        if last_title.as_deref() != Some(now_playing.title.as_str()) {
            last_title = Some(now_playing.title.clone());
            tracing::info!(title = %now_playing.title, "Now playing");
        }
        if now_playing.progress_secs != last_second {
            last_second = now_playing.progress_secs;
            println!("{}", render_player(&view));
        }
    }

    surface.context().clear_player_state();
    surface.sync();

    Ok(())
}
