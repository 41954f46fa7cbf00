//! zkdrop CLI Application

mod cli;

use clap::Parser as _;
use cli::{
    ClaimCommands, Cli, Commands, ContractCommands, KeyCommands, RegistryCommands, TokenCommands,
    VoucherCommands,
};
use zkdrop_sdk::commands::{DeployParams, RootSource};
use zkdrop_sdk::common::ContractFiles;

fn init_tracing() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_timer(tracing_subscriber::fmt::time::uptime())
        .with_target(false)
        .try_init()
        .map_err(|e| eyre::eyre!("Failed to initialize tracing: {:?}", e))?;

    Ok(())
}

#[tokio::main(flavor = "multi_thread")]
#[allow(
    clippy::too_many_lines,
    reason = "Top-level CLI dispatch keeps all command wiring in one place"
)]
async fn main() -> eyre::Result<()> {
    // Load .env file (fails silently if not found)
    let _ = dotenvy::dotenv();

    init_tracing()?;

    let cli = Cli::parse();

    let res = match cli.command {
        Commands::Key { command } => match command {
            KeyCommands::Generate { args } => {
                zkdrop_sdk::commands::key_generate(args.output, args.identity_out)
                    .await
                    .map(drop)
            }
        },
        Commands::Registry { command } => match command {
            RegistryCommands::Build { args } => {
                zkdrop_sdk::commands::registry_build(args.identities, args.registry_out)
                    .await
                    .map(drop)
            }
        },
        Commands::Contract { command } => match command {
            ContractCommands::Deploy { args } => {
                let params = DeployParams {
                    token_symbol: args.token_symbol,
                    contract_id: args.contract_id,
                    admin_key: args.admin,
                    claim_reward: args.claim_reward,
                    admin_gated_updates: args.gated_updates,
                };
                zkdrop_sdk::commands::contract_deploy(params, &args.contract.into()).await
            }
            ContractCommands::Schema => zkdrop_sdk::commands::contract_configuration_schema(),
            ContractCommands::SetCommitment { args } => {
                let source = match (args.registry, args.root) {
                    (_, Some(root)) => RootSource::Explicit(root),
                    (Some(path), None) => RootSource::Registry(path),
                    (None, None) => {
                        return Err(eyre::eyre!("Either --registry or --root is required"));
                    }
                };
                zkdrop_sdk::commands::set_commitment(&args.contract.into(), source, args.admin_key)
                    .await
                    .map(drop)
            }
            ContractCommands::SetIdentifier { args } => {
                zkdrop_sdk::commands::set_identifier(
                    &args.contract.into(),
                    args.identifier,
                    args.admin_key,
                )
                .await
            }
        },
        Commands::Claim { command } => match command {
            ClaimCommands::CheckInclusion { args } => {
                zkdrop_sdk::commands::check_inclusion(
                    &args.contract.into(),
                    args.registry,
                    args.identity,
                )
                .await
            }
            ClaimCommands::Status { args } => {
                zkdrop_sdk::commands::claim_status(
                    &args.contract.into(),
                    args.registry,
                    args.identity,
                )
                .await
                .map(drop)
            }
            ClaimCommands::Prepare { args } => {
                zkdrop_sdk::commands::claim_prepare(args.registry, args.identity, args.output).await
            }
            ClaimCommands::Run { args } => {
                let files: ContractFiles = args.contract.into();
                zkdrop_sdk::commands::claim_run(
                    &files,
                    args.registry,
                    args.identity,
                    args.prepared,
                    args.voucher,
                )
                .await
            }
        },
        Commands::Voucher { command } => match command {
            VoucherCommands::Sign { args } => {
                let kind = args.kind();
                zkdrop_sdk::commands::voucher_sign(
                    args.config,
                    args.admin_key,
                    kind,
                    args.recipient,
                    args.amount,
                    args.output,
                )
                .await
            }
        },
        Commands::Token { command } => match command {
            TokenCommands::Mint { args } => {
                zkdrop_sdk::commands::token_mint(&args.contract.into(), args.voucher).await
            }
            TokenCommands::Send { args } => {
                zkdrop_sdk::commands::token_send(
                    &args.contract.into(),
                    args.sender,
                    args.recipient,
                    args.amount,
                )
                .await
            }
            TokenCommands::Balance { args } => {
                zkdrop_sdk::commands::token_balance(&args.contract.into(), args.account)
                    .await
                    .map(drop)
            }
        },
    };

    if let Err(e) = res {
        tracing::error!("Error: {:?}", e);
        std::process::exit(1);
    }

    Ok(())
}
