//! Interactive console menu.
//!
//! Three numbered actions plus quit.  One operation runs to completion
//! (fetch → reconcile → audit) before the menu accepts the next
//! command; any failure is reported and the loop continues.

use std::fmt::Display;
use std::io::{self, BufRead, Write};

use futsync_core::types::DbId;
use futsync_core::Operation;
use futsync_db::models::league::League;
use futsync_db::models::squad_player::SquadPlayer;
use futsync_db::repositories::{LeagueRepo, SquadPlayerRepo};
use futsync_db::DbPool;
use futsync_sportmonks::SportmonksClient;

/// Team whose squad menu action 1 fetches.
const DEFAULT_TEAM_ID: DbId = 1;

/// Drive the menu until the operator quits or stdin closes.
pub async fn run(client: &SportmonksClient, pool: &DbPool) {
    let stdin = io::stdin();
    loop {
        print_menu();

        let line = match read_line(&stdin) {
            Some(line) => line,
            None => break,
        };

        match line.trim() {
            "q" | "Q" => break,
            "1" => {
                let operation = Operation::TeamSquad {
                    team_id: DEFAULT_TEAM_ID,
                };
                run_operation(client, pool, &operation).await;
            }
            "2" => run_operation(client, pool, &Operation::Leagues).await,
            "3" => {
                let league_id = match prompt_league_id(&mut stdin.lock()) {
                    Some(id) => id,
                    None => continue,
                };
                run_operation(client, pool, &Operation::LeagueDetail { league_id }).await;
            }
            _ => println!("Invalid choice. Please try again."),
        }
    }
}

fn print_menu() {
    println!();
    println!("Menu:");
    println!("1. Fetch team squad");
    println!("2. Fetch leagues");
    println!("3. Fetch league details");
    println!("Press q to quit");
}

/// Read one line from stdin; `None` on EOF or read error.
fn read_line(stdin: &io::Stdin) -> Option<String> {
    let mut line = String::new();
    match stdin.lock().read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line),
    }
}

/// Prompt until a numeric league id is entered; `None` only on EOF.
fn prompt_league_id(input: &mut impl BufRead) -> Option<DbId> {
    loop {
        print!("Enter the league id: ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match input.read_line(&mut line) {
            Ok(0) | Err(_) => return None,
            Ok(_) => {}
        }
        match line.trim().parse::<DbId>() {
            Ok(id) => return Some(id),
            Err(_) => println!("A league id must be a whole number."),
        }
    }
}

/// Run one operation and show the operator what is now stored.
async fn run_operation(client: &SportmonksClient, pool: &DbPool, operation: &Operation) {
    if !futsync_ingest::run(client, pool, operation).await {
        println!(
            "Operation '{}' failed; see the sync log for details.",
            operation.name()
        );
        return;
    }

    let shown = match operation {
        Operation::TeamSquad { .. } => print_all_players(pool).await,
        Operation::Leagues => print_all_leagues(pool).await,
        Operation::LeagueDetail { league_id } => print_league_by_id(pool, *league_id).await,
    };
    if let Err(e) = shown {
        println!("Could not read back the stored records: {e}");
    }
}

async fn print_all_leagues(pool: &DbPool) -> Result<(), sqlx::Error> {
    for league in LeagueRepo::list_all(pool).await? {
        print_league(&league);
    }
    Ok(())
}

async fn print_league_by_id(pool: &DbPool, league_id: DbId) -> Result<(), sqlx::Error> {
    match LeagueRepo::get_by_id(pool, league_id).await? {
        Some(league) => print_league(&league),
        None => println!("League {league_id} is not stored."),
    }
    Ok(())
}

async fn print_all_players(pool: &DbPool) -> Result<(), sqlx::Error> {
    for player in SquadPlayerRepo::list_all(pool).await? {
        print_player(&player);
    }
    Ok(())
}

fn print_league(league: &League) {
    println!("Id: {}", league.id);
    println!("  SportId: {}", fmt_opt(&league.sport_id));
    println!("  CountryId: {}", fmt_opt(&league.country_id));
    println!("  Name: {}", fmt_opt(&league.name));
    println!("  Active: {}", fmt_opt(&league.active));
    println!("  ShortCode: {}", fmt_opt(&league.short_code));
    println!("  ImagePath: {}", fmt_opt(&league.image_path));
    println!("  Type: {}", fmt_opt(&league.league_type));
    println!("  SubType: {}", fmt_opt(&league.sub_type));
    println!("  LastPlayedAt: {}", fmt_opt(&league.last_played_at));
    println!("  Category: {}", fmt_opt(&league.category));
    println!("  HasJerseys: {}", fmt_opt(&league.has_jerseys));
}

fn print_player(player: &SquadPlayer) {
    println!("Id: {}", player.id);
    println!("  TransferId: {}", fmt_opt(&player.transfer_id));
    println!("  PlayerId: {}", fmt_opt(&player.player_id));
    println!("  TeamId: {}", fmt_opt(&player.team_id));
    println!("  PositionId: {}", fmt_opt(&player.position_id));
    println!(
        "  DetailedPositionId: {}",
        fmt_opt(&player.detailed_position_id)
    );
    println!("  Start: {}", fmt_opt(&player.start_date));
    println!("  End: {}", fmt_opt(&player.end_date));
    println!("  Captain: {}", fmt_opt(&player.captain));
    println!("  JerseyNumber: {}", fmt_opt(&player.jersey_number));
}

fn fmt_opt<T: Display>(value: &Option<T>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "-".to_string(),
    }
}
