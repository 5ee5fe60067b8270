use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::rewards::{RedeemOutcome, RewardSession};
use crate::errors::{AppError, AppResult};
use crate::models::reward::RewardState;
use crate::ui::messages::{success, warning};
use crate::utils::formatting::{bold, points};
use crate::utils::table::{Column, Table};
use ansi_term::Colour;

/// Show score and catalog; optionally adjust points and redeem a reward.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Rewards {
        redeem,
        award,
        set_score,
    } = cmd
    {
        let store = cfg.record_store();
        let mut session = RewardSession::load(&store);

        //
        // 1. Points management
        //
        if let Some(n) = award {
            if *n < 0 {
                return Err(AppError::InvalidPoints(*n));
            }
            session.award(*n)?;
            success(format!("+{} adicionados.", points(*n)));
        }

        if let Some(n) = set_score {
            if *n < 0 {
                return Err(AppError::InvalidPoints(*n));
            }
            session.set_score(*n);
            success(format!("Pontuação definida em {}.", points(*n)));
        }

        //
        // 2. Redemption
        //
        if let Some(reference) = redeem {
            let reward = session
                .find(reference)
                .cloned()
                .ok_or_else(|| AppError::UnknownReward(reference.clone()))?;

            match session.redeem(&reward) {
                RedeemOutcome::Redeemed => success(&session.message),
                RedeemOutcome::Refused => warning(&session.message),
            }
            println!();
        }

        //
        // 3. Listing
        //
        print_rewards(&session, cfg.show_colors);
    }

    Ok(())
}

fn print_rewards(session: &RewardSession<'_>, colors: bool) {
    println!("🏆 Metas e Recompensas");
    println!("{}\n", bold(&format!("Pontos: {}", session.score)));

    let mut table = Table::new(vec![
        Column::right("#"),
        Column::left("Recompensa"),
        Column::right("Pontos"),
        Column::left("Estado"),
    ]);

    for (i, reward) in session.catalog.iter().enumerate() {
        let state = session.state_of(reward);
        let row = vec![
            (i + 1).to_string(),
            reward.name.clone(),
            reward.points_required.to_string(),
            state.as_str().to_string(),
        ];

        if colors {
            let style = match state {
                RewardState::Available => Colour::Green.normal(),
                RewardState::Redeemed => Colour::Fixed(8).normal(),
                RewardState::Locked => Colour::Red.normal(),
            };
            table.add_styled_row(row, style);
        } else {
            table.add_row(row);
        }
    }

    print!("{}", table.render());
}
