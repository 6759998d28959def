//! Engine integration tests: wheel, strategies, runs and streaks.

#![allow(clippy::float_cmp)]

use roulettrs::{
    BetContext, BettingStrategy, CapitalMode, Color, FixedOutcomes, Money, OutcomeSource,
    RunPhase, SpinOutcome, Simulator, Strategy, StreakTally, Wheel, loss_streaks, place_bet,
};

const fn context(capital: Money, losses: u32, last_stake: Money, last_won: bool) -> BetContext {
    BetContext {
        capital,
        base_stake: 10,
        consecutive_losses: losses,
        last_stake,
        last_won,
    }
}

fn outcome(number: u8) -> SpinOutcome {
    SpinOutcome::new(number).unwrap()
}

fn finite(strategy: Strategy, base: Money, capital: Money, spins: u32) -> Simulator {
    Simulator::new(strategy, CapitalMode::Finite, base, capital, spins)
}

#[test]
fn outcome_colors_follow_parity() {
    assert_eq!(SpinOutcome::ZERO.color(), None);
    assert_eq!(outcome(1).color(), Some(Color::Red));
    assert_eq!(outcome(35).color(), Some(Color::Red));
    assert_eq!(outcome(2).color(), Some(Color::Black));
    assert_eq!(outcome(36).color(), Some(Color::Black));
    assert_eq!(SpinOutcome::new(37), None);

    assert!(!SpinOutcome::ZERO.pays(Color::Red));
    assert!(!SpinOutcome::ZERO.pays(Color::Black));
}

#[test]
fn place_bet_consumes_one_outcome_per_call() {
    let mut source = FixedOutcomes::new(vec![outcome(0), outcome(7), outcome(8)]);
    assert!(!place_bet(&mut source, Color::Red));
    assert!(place_bet(&mut source, Color::Red));
    assert!(!place_bet(&mut source, Color::Red));
    assert_eq!(source.drawn(), 3);

    let mut source = FixedOutcomes::new(vec![outcome(0), outcome(8), outcome(7)]);
    assert!(!place_bet(&mut source, Color::Black));
    assert!(place_bet(&mut source, Color::Black));
    assert!(!place_bet(&mut source, Color::Black));
}

#[test]
fn fixed_outcomes_repeat_and_empty_lands_on_zero() {
    let mut source = FixedOutcomes::for_red(&[true, false]);
    let drawn: Vec<bool> = (0..4).map(|_| place_bet(&mut source, Color::Red)).collect();
    assert_eq!(drawn, vec![true, false, true, false]);

    let mut empty = FixedOutcomes::default();
    assert_eq!(empty.spin(), SpinOutcome::ZERO);
}

#[test]
fn seeded_wheel_is_reproducible_and_covers_every_pocket() {
    let mut a = Wheel::seeded(11);
    let mut b = Wheel::seeded(11);
    let mut seen = [false; 37];

    for _ in 0..10_000 {
        let spin = a.spin();
        assert_eq!(spin, b.spin());
        seen[usize::from(spin.number())] = true;
    }

    assert!(seen.iter().all(|&hit| hit));
}

#[test]
fn run_wheels_use_distinct_streams() {
    let mut first = Wheel::for_run(5, 0);
    let mut second = Wheel::for_run(5, 1);
    let a: Vec<SpinOutcome> = (0..32).map(|_| first.spin()).collect();
    let b: Vec<SpinOutcome> = (0..32).map(|_| second.spin()).collect();
    assert_ne!(a, b);

    let mut again = Wheel::for_run(5, 0);
    let c: Vec<SpinOutcome> = (0..32).map(|_| again.spin()).collect();
    assert_eq!(a, c);
}

#[test]
fn martingale_doubles_per_loss() {
    for (losses, expected) in [(0, 10), (1, 20), (2, 40), (5, 320)] {
        assert_eq!(Strategy::Martingale.next_stake(&context(1000, losses, 10, false)), expected);
    }
    assert_eq!(Strategy::Martingale.next_stake(&context(1000, 200, 10, false)), Money::MAX);
}

#[test]
fn d_alembert_adds_one_base_per_loss() {
    for losses in 0..6 {
        let expected = 10 * (1 + Money::from(losses));
        assert_eq!(Strategy::DAlembert.next_stake(&context(1000, losses, 10, false)), expected);
    }
}

#[test]
fn fibonacci_follows_sequence() {
    let stakes: Vec<Money> = (0..=6)
        .map(|losses| Strategy::Fibonacci.next_stake(&context(1000, losses, 10, false)))
        .collect();
    assert_eq!(stakes, vec![10, 10, 20, 30, 50, 80, 130]);
    assert_eq!(Strategy::Fibonacci.next_stake(&context(1000, 1_000, 10, false)), Money::MAX);
}

#[test]
fn own_strategy_doubles_after_wins_only() {
    let own = Strategy::Own;
    assert_eq!(own.next_stake(&context(1000, 0, 40, true)), 80);
    assert_eq!(own.next_stake(&context(50, 0, 40, true)), 50);
    assert_eq!(own.next_stake(&context(1000, 0, 40, false)), 10);
    assert_eq!(own.next_stake(&context(5, 0, 40, false)), 5);
    // The loss count plays no part.
    assert_eq!(own.next_stake(&context(1000, 7, 40, false)), 10);
    assert_eq!(own.next_stake(&context(1000, 7, 40, true)), 80);
}

#[test]
fn stakes_are_never_negative() {
    for strategy in Strategy::ALL {
        for capital in [0, 1, 15, 1000] {
            for losses in [0, 1, 3, 40, 100] {
                for last_won in [false, true] {
                    let ctx = context(capital, losses, 20, last_won);
                    let stake = strategy.next_stake(&ctx);
                    assert!(stake >= 0, "{strategy} staked {stake}");
                    if strategy == Strategy::Own {
                        assert!(stake <= capital);
                    }
                }
            }
        }
    }
}

#[test]
fn strategy_selectors_parse() {
    assert_eq!("m".parse(), Ok(Strategy::Martingale));
    assert_eq!("d".parse(), Ok(Strategy::DAlembert));
    assert_eq!("f".parse(), Ok(Strategy::Fibonacci));
    assert_eq!("o".parse(), Ok(Strategy::Own));
    assert_eq!("Fibonacci".parse(), Ok(Strategy::Fibonacci));
    assert_eq!(
        "x".parse::<Strategy>(),
        Err(roulettrs::ConfigError::UnknownStrategy)
    );
    for strategy in Strategy::ALL {
        assert_eq!(strategy.code().to_string().parse(), Ok(strategy));
    }
}

#[test]
fn finite_mode_clamps_first_stake_to_capital() {
    let simulator = finite(Strategy::Martingale, 200, 100, 1);
    assert_eq!(simulator.stake(&simulator.start()), 100);

    let run = simulator.run(&mut FixedOutcomes::for_red(&[true]));
    assert_eq!(run.history, vec![100, 200]);
    assert!(!run.ruined);
}

#[test]
fn finite_mode_stops_at_ruin() {
    let simulator = finite(Strategy::Martingale, 200, 100, 3);
    let mut source = FixedOutcomes::for_red(&[false]);
    let run = simulator.run(&mut source);

    assert_eq!(run.history, vec![100, 0]);
    assert!(run.ruined);
    assert_eq!(source.drawn(), 1);
}

#[test]
fn ruin_on_the_final_spin_is_not_flagged() {
    let simulator = finite(Strategy::Martingale, 200, 100, 1);
    let run = simulator.run(&mut FixedOutcomes::for_red(&[false]));

    assert_eq!(run.history, vec![100, 0]);
    assert!(!run.ruined);
}

#[test]
fn infinite_mode_goes_negative_without_ruin() {
    let simulator = Simulator::new(Strategy::Martingale, CapitalMode::Infinite, 200, 100, 3);
    let run = simulator.run(&mut FixedOutcomes::for_red(&[false]));

    assert_eq!(run.history, vec![100, -100, -500, -1300]);
    assert!(!run.ruined);
    assert_eq!(run.spins_played(), 3);
}

#[test]
fn martingale_run_recovers_after_win() {
    let simulator = finite(Strategy::Martingale, 10, 1000, 4);
    let run = simulator.run(&mut FixedOutcomes::for_red(&[false, false, true, false]));
    assert_eq!(run.history, vec![1000, 990, 970, 1010, 1000]);
}

#[test]
fn d_alembert_run() {
    let simulator = finite(Strategy::DAlembert, 10, 1000, 3);
    let run = simulator.run(&mut FixedOutcomes::for_red(&[false, false, true]));
    assert_eq!(run.history, vec![1000, 990, 970, 1000]);
}

#[test]
fn fibonacci_run() {
    let simulator = finite(Strategy::Fibonacci, 10, 1000, 4);
    let run = simulator.run(&mut FixedOutcomes::for_red(&[false, false, false, true]));
    assert_eq!(run.history, vec![1000, 990, 980, 960, 990]);
}

#[test]
fn own_run_uses_previous_stake_and_outcome() {
    let simulator = finite(Strategy::Own, 10, 1000, 4);
    let run = simulator.run(&mut FixedOutcomes::for_red(&[true, true, false, true]));
    assert_eq!(run.history, vec![1000, 1010, 1030, 990, 1000]);
}

#[test]
fn step_threads_state_between_spins() {
    let simulator = finite(Strategy::Martingale, 10, 1000, 10);
    let mut state = simulator.start();
    let mut source = FixedOutcomes::for_red(&[false, false, true]);

    assert_eq!(simulator.step(&mut state, &mut source), RunPhase::Active);
    assert_eq!(state.consecutive_losses(), 1);
    assert!(!state.last_won());
    assert_eq!(state.last_stake(), 10);

    assert_eq!(simulator.step(&mut state, &mut source), RunPhase::Active);
    assert_eq!(state.consecutive_losses(), 2);
    assert_eq!(state.last_stake(), 20);

    assert_eq!(simulator.step(&mut state, &mut source), RunPhase::Active);
    assert_eq!(state.consecutive_losses(), 0);
    assert!(state.last_won());
    assert_eq!(state.capital(), 1010);
    assert_eq!(state.spins_played(), 3);
    assert_eq!(state.history(), &[1000, 990, 970, 1010]);
}

#[test]
fn ruined_step_leaves_state_untouched() {
    let simulator = finite(Strategy::DAlembert, 10, 0, 5);
    let mut state = simulator.start();
    let mut source = FixedOutcomes::for_red(&[true]);

    assert_eq!(simulator.step(&mut state, &mut source), RunPhase::Ruined);
    assert_eq!(state.history(), &[0]);
    assert_eq!(source.drawn(), 0);
    assert!(RunPhase::Ruined.is_terminal());
    assert!(RunPhase::Completed.is_terminal());
    assert!(!RunPhase::Active.is_terminal());
}

#[test]
fn seeded_finite_runs_never_overdraw() {
    for strategy in Strategy::ALL {
        let simulator = finite(strategy, 10, 1000, 500);
        for seed in 0..20 {
            let run = simulator.run(&mut Wheel::seeded(seed));
            assert!(run.history.len() <= 501);
            assert!(run.history.iter().all(|&capital| capital >= 0));
            if run.ruined {
                assert_eq!(run.final_capital(), Some(0));
                assert!(run.history.len() < 501);
            }
        }
    }
}

#[test]
fn seeded_infinite_runs_play_every_spin() {
    for strategy in Strategy::ALL {
        let simulator = Simulator::new(strategy, CapitalMode::Infinite, 10, 1000, 300);
        let run = simulator.run(&mut Wheel::seeded(9));
        assert_eq!(run.history.len(), 301);
        assert!(!run.ruined);
    }
}

#[test]
fn streaks_split_on_wins_and_close_at_end() {
    assert_eq!(loss_streaks(&[1000, 900, 800, 950, 900, 850, 800]), vec![2, 3]);
    assert_eq!(loss_streaks(&[3, 2, 2, 1]), vec![1, 1]);
    assert_eq!(loss_streaks(&[5, 4, 6, 7]), vec![1]);
}

#[test]
fn streaks_of_degenerate_histories_are_empty() {
    assert!(loss_streaks(&[]).is_empty());
    assert!(loss_streaks(&[1000]).is_empty());
    assert!(loss_streaks(&[5, 5, 5]).is_empty());
    assert!(loss_streaks(&[1, 2, 3, 4, 5]).is_empty());
}

#[test]
fn tally_counts_and_merges() {
    let mut tally = StreakTally::new();
    tally.record_history(&[1000, 900, 800, 950, 900, 850, 800]);
    tally.record(0);

    let mut other = StreakTally::new();
    other.record_history(&[10, 9, 10, 9, 8]);

    tally.merge(&other);
    assert_eq!(tally.total(), 4);
    assert_eq!(tally.count(1), 1);
    assert_eq!(tally.count(2), 2);
    assert_eq!(tally.count(3), 1);
    assert_eq!(tally.count(4), 0);
    assert_eq!(tally.longest(), Some(3));
    assert_eq!(tally.counts(), vec![(1, 1), (2, 2), (3, 1)]);

    let frequencies = tally.relative_frequencies();
    assert_eq!(frequencies, vec![(1, 0.25), (2, 0.5), (3, 0.25)]);
    let sum: f64 = frequencies.iter().map(|&(_, share)| share).sum();
    assert!((sum - 1.0).abs() < 1e-12);
}

#[test]
fn empty_tally_has_no_distribution() {
    let tally = StreakTally::new();
    assert!(tally.is_empty());
    assert_eq!(tally.longest(), None);
    assert!(tally.relative_frequencies().is_empty());
}
