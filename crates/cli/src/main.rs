use std::error::Error;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use client::{Api, FileStorage};

mod config;

#[derive(Parser, Debug)]
#[command(name = "gaveta")]
#[command(about = "Back-office client for the clinic + store (quotations, cash, commissions)")]
struct Cli {
    /// Optional config file path (TOML).
    #[arg(long)]
    config: Option<String>,
    /// Override base URL (e.g. http://127.0.0.1:4000/api).
    #[arg(long)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Authenticate and persist the session.
    Login {
        username: String,
        /// Also read from `GAVETA_PASSWORD`.
        #[arg(long, env = "GAVETA_PASSWORD")]
        password: String,
    },
    /// Drop the persisted session.
    Logout,
    /// List all quotations with their services and payments.
    Quotations,
    /// Show one quotation fully assembled.
    Quotation { id: i64 },
    /// Show a cash box with its closing reconciliation.
    Cash { id: i64 },
    /// Show a doctor's commission summary.
    Commissions { doctor_id: i64 },
    /// Backend totals for a date range.
    Summary {
        #[arg(long)]
        from: NaiveDate,
        #[arg(long)]
        to: NaiveDate,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "client=warn,gaveta_cli=info".into()),
        )
        .init();

    let cli = Cli::parse();
    let settings = config::load(cli.config.as_deref(), cli.base_url)?;

    let api = Api::builder()
        .base_url(&settings.base_url)
        .storage(FileStorage::new(&settings.session_file))
        .on_unauthorized(|| {
            eprintln!("session expired: run `gaveta login <username>` again");
        })
        .build();

    match cli.command {
        Command::Login { username, password } => {
            let session = api.login(&username, &password).await?;
            println!(
                "logged in as {} ({:?})",
                session.user.username, session.user.role
            );
        }
        Command::Logout => {
            api.logout().await;
            println!("logged out");
        }
        Command::Quotations => {
            for full in api.quotations_full().await? {
                let q = &full.quotation;
                println!(
                    "#{} {} {} total {} pending {} [{}]",
                    q.id,
                    q.date,
                    q.client_name,
                    q.total,
                    q.pending,
                    q.status.as_wire()
                );
                for service in &full.services {
                    println!(
                        "    service {} price {} ({} commissions)",
                        service.service_id,
                        service.price,
                        service.commissions.len()
                    );
                }
                for payment in &full.payments {
                    println!(
                        "    payment {} {} via {}",
                        payment.date,
                        payment.amount,
                        payment.method.as_wire()
                    );
                }
            }
        }
        Command::Quotation { id } => {
            let full = api.quotation_full(id).await?;
            let q = &full.quotation;
            println!(
                "#{} {} {} total {} pending {} [{}]",
                q.id,
                q.date,
                q.client_name,
                q.total,
                q.pending,
                q.status.as_wire()
            );
            for service in &full.services {
                println!("  service {} price {}", service.service_id, service.price);
                for commission in &service.commissions {
                    println!(
                        "      doctor {} {}% -> {} (pending {})",
                        commission.doctor_id,
                        commission.percentage,
                        commission.amount,
                        commission.pending
                    );
                }
            }
            for payment in &full.payments {
                println!(
                    "  payment {} {} via {}",
                    payment.date,
                    payment.amount,
                    payment.method.as_wire()
                );
            }
        }
        Command::Cash { id } => {
            let status = api.cash_box_status(id).await?;
            let rec = &status.reconciliation;
            println!(
                "cash box #{} opened {} [{}] ({} movements, {} expenses)",
                status.cash_box.id,
                status.cash_box.opened_at,
                if status.cash_box.is_open() { "open" } else { "closed" },
                status.movements.len(),
                status.expenses.len()
            );
            println!(
                "expected cash {} / qr income {} / expenses {}",
                rec.expected_cash, rec.qr_income, rec.expenses_total
            );
        }
        Command::Commissions { doctor_id } => {
            let summary = api.doctor_commission_summary(doctor_id).await?;
            println!(
                "doctor {doctor_id}: total {} pending {} paid {}",
                summary.total,
                summary.pending,
                summary.paid()
            );
        }
        Command::Summary { from, to } => {
            let summary = api.report_summary(from, to).await?;
            println!("{} .. {}", summary.from, summary.to);
            println!("  sales          {}", summary.sales_income);
            println!("  consultations  {}", summary.consultation_income);
            println!("  quotation pay  {}", summary.quotation_payments);
            println!("  expenses       {}", summary.expenses);
            println!("  net            {}", summary.net);
        }
    }

    Ok(())
}
