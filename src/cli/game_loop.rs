//! Interactive prompt loop.
//!
//! Reads one line per action from stdin, asks follow-up questions for
//! incomplete search commands, and forwards the action to the game session.

use std::io::{self, Write};

use actix::Addr;
use log::debug;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

use crate::cli::command::{Command, parse_command, pending_prompts};
use crate::cli::render::{INSTRUCTIONS, describe_result, format_standings, print_grid, print_player_state};
use crate::game::types::GamePhase;
use crate::session::GameSession;
use crate::session::messages::{GetStandings, GetView, SubmitAction};

type Input = Lines<BufReader<Stdin>>;

/// Print `text` and read one line. `None` on end of input.
async fn prompt(input: &mut Input, text: &str) -> io::Result<Option<String>> {
    print!("{text}");
    io::stdout().flush()?;
    input.next_line().await
}

/// Run the game until it ends, the player quits, or stdin closes.
pub async fn run_game_loop(session: Addr<GameSession>) -> io::Result<()> {
    let mut input = BufReader::new(tokio::io::stdin()).lines();
    println!("{INSTRUCTIONS}");

    loop {
        let view = session.send(GetView).await.map_err(io::Error::other)?;
        if view.phase == GamePhase::GameOver {
            break;
        }

        print_grid(&view.snapshot);
        if let Some(player) = &view.current {
            print_player_state(player);
        }

        let Some(line) = prompt(&mut input, "Enter your action (move or search): ").await? else {
            debug!("[Shell] End of input");
            break;
        };

        let mut line = line.trim().to_lowercase();
        for follow_up in pending_prompts(&line) {
            let Some(answer) = prompt(&mut input, &follow_up.text(view.snapshot.size)).await? else {
                return Ok(());
            };
            line.push(' ');
            line.push_str(answer.trim());
        }

        match parse_command(&line) {
            Command::Quit => break,
            Command::Act(action) => {
                let result = session.send(SubmitAction { action }).await.map_err(io::Error::other)?;
                for message in describe_result(&result) {
                    println!("{message}");
                }
            }
        }
    }

    let view = session.send(GetView).await.map_err(io::Error::other)?;
    print_grid(&view.snapshot);
    let standings = session.send(GetStandings).await.map_err(io::Error::other)?;
    println!("{}", format_standings(&standings));
    Ok(())
}
