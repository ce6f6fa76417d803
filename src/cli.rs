//! Command-line surface and dispatch.
//!
//! `run` builds the venue clients from [`Config`], hands them to the use
//! cases and writes rendered output to `out`. Errors are returned untouched;
//! turning them into text is left to [`crate::render::error`].

use crate::config::Config;
use crate::domain::order::CreateOrder;
use crate::domain::position::{PositionQuery, Product};
use crate::error::SdkError;
use crate::http::{BitFlyerHttp, KabucomHttp};
use crate::render;
use crate::usecase::{BitFlyerApi, BitFlyerUseCase, KabucomUseCase};

use clap::{Args, Parser, Subcommand};
use std::io::Write;
use std::time::Duration;

/// Clears the terminal and homes the cursor between board refreshes.
const CLEAR_SCREEN: &str = "\x1B[2J\x1B[H";

#[derive(Parser, Debug)]
#[command(name = "capital")]
#[command(about = "Query bitFlyer and kabu station from the command line")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Actions related to bitFlyer
    #[command(subcommand)]
    Bitflyer(BitFlyerCommand),
    /// Actions related to kabucom
    #[command(subcommand)]
    Kabucom(KabucomCommand),
}

#[derive(Subcommand, Debug)]
pub enum BitFlyerCommand {
    /// Show available markets
    Markets,
    /// Show current board
    Board {
        product_code: String,
        /// Keep refreshing the board
        #[arg(short, long)]
        daemon: bool,
        /// Seconds between refreshes in daemon mode
        #[arg(long, default_value_t = 5)]
        interval: u64,
    },
    /// Show current balance (requires authorization)
    Balance,
    /// Send orders (requires authorization)
    #[command(subcommand)]
    Orders(OrderCommand),
}

#[derive(Subcommand, Debug)]
pub enum OrderCommand {
    /// Send a 'buy' limit order
    Buy(OrderArgs),
    /// Send a 'sell' limit order
    Sell(OrderArgs),
}

#[derive(Args, Debug, Clone, PartialEq)]
pub struct OrderArgs {
    /// Product code to order
    #[arg(short = 'c', long = "code")]
    pub product_code: String,
    /// Order price
    #[arg(short, long)]
    pub price: f64,
    /// Order size
    #[arg(short, long)]
    pub size: f64,
}

#[derive(Subcommand, Debug)]
pub enum KabucomCommand {
    /// Exchange the API password for a token
    Authorize {
        /// API password
        #[arg(short, long)]
        password: String,
    },
    /// Show current positions
    Balance {
        /// Token returned by `authorize`
        #[arg(short, long)]
        token: String,
        /// all, cash, margin, future or option
        #[arg(long)]
        product: Option<Product>,
    },
}

impl OrderCommand {
    pub fn to_order(&self) -> CreateOrder {
        let (args, buy) = match self {
            OrderCommand::Buy(args) => (args, true),
            OrderCommand::Sell(args) => (args, false),
        };
        CreateOrder {
            product_code: args.product_code.clone(),
            price: args.price,
            size: args.size,
            buy,
        }
    }
}

pub async fn run(cli: Cli, config: &Config, out: &mut impl Write) -> Result<(), SdkError> {
    match cli.command {
        Command::Bitflyer(command) => {
            let client = BitFlyerHttp::new(
                &config.bitflyer_api_host,
                config.bitflyer_credentials.clone(),
            )?;
            run_bitflyer(command, &BitFlyerUseCase::new(client), out).await
        }
        Command::Kabucom(command) => {
            let client = KabucomHttp::new(&config.kabucom_api_host)?;
            let usecase = KabucomUseCase::new(client);
            match command {
                KabucomCommand::Authorize { password } => {
                    let token = usecase.authorize(&password).await?;
                    write!(out, "{}", render::token(&token))?;
                }
                KabucomCommand::Balance { token, product } => {
                    let query = PositionQuery {
                        product,
                        ..PositionQuery::default()
                    };
                    let positions = usecase.balances(&token, &query).await?;
                    write!(out, "{}", render::positions(&positions))?;
                }
            }
            Ok(())
        }
    }
}

pub async fn run_bitflyer<C: BitFlyerApi>(
    command: BitFlyerCommand,
    usecase: &BitFlyerUseCase<C>,
    out: &mut impl Write,
) -> Result<(), SdkError> {
    match command {
        BitFlyerCommand::Markets => {
            let markets = usecase.markets().await?;
            write!(out, "{}", render::markets(&markets))?;
        }
        BitFlyerCommand::Board {
            product_code,
            daemon,
            interval,
        } => {
            let board = usecase.board(&product_code).await?;
            write!(out, "{}", render::board(&board))?;
            if daemon {
                watch_board(usecase, &product_code, Duration::from_secs(interval), out).await?;
            }
        }
        BitFlyerCommand::Balance => {
            let balances = usecase.balances().await?;
            write!(out, "{}", render::balances(&balances))?;
        }
        BitFlyerCommand::Orders(command) => {
            let acceptance = usecase.create_order(&command.to_order()).await?;
            write!(out, "{}", render::order(&acceptance))?;
        }
    }
    Ok(())
}

/// Re-fetch the board forever; the first failure ends the loop.
async fn watch_board<C: BitFlyerApi>(
    usecase: &BitFlyerUseCase<C>,
    product_code: &str,
    interval: Duration,
    out: &mut impl Write,
) -> Result<(), SdkError> {
    loop {
        tokio::time::sleep(interval).await;
        let board = usecase.board(product_code).await?;
        write!(out, "{}", CLEAR_SCREEN)?;
        write!(out, "{}", render::board(&board))?;
        out.flush()?;
    }
}
