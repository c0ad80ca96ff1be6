//! Numbered menu loop.
//!
//! Invalid answers re-prompt; closing input ends the session like
//! choosing Exit. Only console I/O failures escape `run`.

use std::str::FromStr;

use tracing::debug;

use crate::core::{DoorId, Error, GameRng, Result, SessionConfig, MAX_DOORS};
use crate::history::{HistoryEntry, HistoryStore, Mode};
use crate::rules::{Round, RoundEngine};
use crate::simulation::BatchRunner;

use super::presenter::Presenter;
use super::render;

/// A menu option.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuChoice {
    /// Interactive round with the classic door count.
    PlayClassic,
    /// Interactive round with a chosen door count.
    PlayDoors,
    /// Simulation with the classic door count.
    SimulateClassic,
    /// Simulation with a chosen door count.
    SimulateDoors,
    /// Print the history.
    ViewHistory,
    /// Leave.
    Exit,
}

impl FromStr for MenuChoice {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "1" => Ok(MenuChoice::PlayClassic),
            "2" => Ok(MenuChoice::PlayDoors),
            "3" => Ok(MenuChoice::SimulateClassic),
            "4" => Ok(MenuChoice::SimulateDoors),
            "5" => Ok(MenuChoice::ViewHistory),
            "6" => Ok(MenuChoice::Exit),
            other => Err(Error::InvalidMenuChoice(other.to_string())),
        }
    }
}

/// Whether the session keeps going after an action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// An interactive session: menu, rounds, simulations and history.
pub struct Session<P: Presenter, H: HistoryStore> {
    config: SessionConfig,
    presenter: P,
    history: H,
    engine: RoundEngine<GameRng>,
    runner: BatchRunner<GameRng>,
}

impl<P: Presenter, H: HistoryStore> Session<P, H> {
    /// Create a session. Seeds from `config.seed` or the operating system.
    pub fn new(config: SessionConfig, presenter: P, history: H) -> Self {
        let mut rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        let engine = RoundEngine::new(rng.fork());
        let runner = BatchRunner::new(rng.fork());

        Self {
            config,
            presenter,
            history,
            engine,
            runner,
        }
    }

    /// The history store.
    pub fn history(&self) -> &H {
        &self.history
    }

    /// Consume the session, returning the presenter.
    pub fn into_presenter(self) -> P {
        self.presenter
    }

    /// Run the menu until Exit or end of input.
    pub fn run(&mut self) -> Result<()> {
        loop {
            let Some(answer) = self.presenter.prompt(&render::menu())? else {
                return Ok(());
            };

            let choice = match answer.parse::<MenuChoice>() {
                Ok(choice) => choice,
                Err(err) => {
                    debug!(%err, "Menu input rejected");
                    self.presenter.show("Invalid choice. Try again.\n")?;
                    continue;
                }
            };

            if self.dispatch(choice)? == Flow::Quit {
                return Ok(());
            }
        }
    }

    fn dispatch(&mut self, choice: MenuChoice) -> Result<Flow> {
        match choice {
            MenuChoice::PlayClassic => self.play_interactive(self.config.classic_doors),
            MenuChoice::PlayDoors => match self.ask_door_count()? {
                Some(doors) => self.play_interactive(doors),
                None => Ok(Flow::Quit),
            },
            MenuChoice::SimulateClassic => self.simulate(self.config.classic_doors),
            MenuChoice::SimulateDoors => match self.ask_door_count()? {
                Some(doors) => self.simulate(doors),
                None => Ok(Flow::Quit),
            },
            MenuChoice::ViewHistory => {
                self.view_history()?;
                Ok(Flow::Continue)
            }
            MenuChoice::Exit => {
                self.presenter.show("Goodbye!\n")?;
                Ok(Flow::Quit)
            }
        }
    }

    fn play_interactive(&mut self, door_count: usize) -> Result<Flow> {
        let mut round = Round::new(door_count);
        let doors = round.door_count();
        self.presenter.show(&render::intro_diagram(doors))?;

        let question = format!("Pick a door (1 to {doors}): ");
        loop {
            let Some(number) = self.ask_number(&question)? else {
                return Ok(Flow::Quit);
            };
            if let Some(door) = DoorId::from_number(number) {
                match self.engine.assign(&mut round, door) {
                    Ok(()) => break,
                    Err(Error::DoorOutOfRange { .. }) => {}
                    Err(err) => return Err(err),
                }
            }
            self.presenter.show(&format!("Pick a door between 1 and {doors}.\n"))?;
        }

        self.engine.reveal(&mut round)?;
        self.presenter
            .show(&format!("\nMonty opens {} goat doors:\n", round.opened().len()))?;
        self.presenter.show(&render::revealed_doors(&round))?;

        let Some(answer) = self.presenter.prompt("Do you want to switch your choice? (y/n): ")? else {
            return Ok(Flow::Quit);
        };
        let switched = answer.chars().next().is_some_and(|c| c.eq_ignore_ascii_case(&'y'));

        self.engine.apply_decision(&mut round, switched)?;
        let outcome = self.engine.resolve(&mut round)?;

        self.presenter.show("\nFinal Reveal:\n")?;
        self.presenter.show(&render::final_doors(&round))?;
        self.presenter.show(&render::outcome_message(&round, outcome))?;

        let entry = HistoryEntry::now(Mode::Interactive, doors, switched, outcome.is_win());
        if let Err(err) = self.history.append(&entry) {
            debug!(%err, "Skipping history write");
        }
        Ok(Flow::Continue)
    }

    fn simulate(&mut self, door_count: usize) -> Result<Flow> {
        let Some(trials) = self.ask_number("Enter number of simulations: ")? else {
            return Ok(Flow::Quit);
        };

        let report = self.runner.compare(door_count, trials as u64)?;
        self.presenter.show(&render::simulation_report(&report))?;
        Ok(Flow::Continue)
    }

    fn view_history(&mut self) -> Result<()> {
        let lines = match self.history.read_all() {
            Ok(lines) => lines,
            Err(err) => {
                debug!(%err, "History unreadable");
                Vec::new()
            }
        };
        self.presenter.show(&render::history(&lines))?;
        Ok(())
    }

    fn ask_door_count(&mut self) -> Result<Option<usize>> {
        loop {
            let Some(doors) = self.ask_number("Enter number of doors (minimum 3): ")? else {
                return Ok(None);
            };
            if doors <= MAX_DOORS {
                return Ok(Some(doors));
            }
            debug!(doors, max = MAX_DOORS, "Door count rejected");
            self.presenter.show(&format!("Pick at most {MAX_DOORS} doors.\n"))?;
        }
    }

    fn ask_number(&mut self, question: &str) -> Result<Option<usize>> {
        loop {
            let Some(answer) = self.presenter.prompt(question)? else {
                return Ok(None);
            };
            match answer.parse::<usize>() {
                Ok(number) => return Ok(Some(number)),
                Err(_) => self.presenter.show("Please enter a whole number.\n")?,
            }
        }
    }
}
