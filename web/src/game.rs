use crate::info::InfoView;
use crate::ports::{LocalStorageStore, WebPresenter};
use crate::utils::*;
use clap::Args;
use slot_machine_core as slot;
use slot::{Bet, Coins, PresentationPort, Sound, Symbol};
use yew::prelude::*;

type Machine = slot::SlotMachine<slot::RandomReelSource, WebPresenter, LocalStorageStore>;

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    Spin,
    SelectBet(Bet),
    Reset,
    NewGame,
    ToggleInfo,
}

#[derive(Args, Properties, Debug, Clone, PartialEq)]
pub(crate) struct GameProps {
    /// Force a seed instead of random
    #[arg(short, long)]
    #[prop_or_default]
    pub seed: Option<u64>,
}

fn symbol_image(symbol: Symbol) -> String {
    format!("images/gfx-{}.svg", symbol.name())
}

#[derive(Properties, Clone, PartialEq)]
struct ScoreProps {
    label: AttrValue,
    value: Coins,
    #[prop_or_default]
    trailing: bool,
}

#[function_component(ScoreBox)]
fn score_box(props: &ScoreProps) -> Html {
    let label = html! { <span class="score-label">{props.label.to_uppercase()}</span> };
    let value = html! { <span class="score-number">{props.value}</span> };

    html! {
        <div class="score">
            if props.trailing {
                <>{value}{label}</>
            } else {
                <>{label}{value}</>
            }
        </div>
    }
}

#[derive(Properties, Clone, PartialEq)]
struct ReelProps {
    reel: usize,
    symbol: Symbol,
}

#[function_component(ReelView)]
fn reel_view(props: &ReelProps) -> Html {
    let ReelProps { reel, symbol } = props.clone();

    html! {
        <div class="reel">
            <img class={classes!("symbol", format!("rise-{}", reel))} src={symbol_image(symbol)} alt={symbol.name()}/>
        </div>
    }
}

#[derive(Properties, Clone, PartialEq)]
struct BetProps {
    bet: Bet,
    active: bool,
    onselect: Callback<Bet>,
}

#[function_component(BetCapsule)]
fn bet_capsule(props: &BetProps) -> Html {
    let BetProps {
        bet,
        active,
        onselect,
    } = props.clone();
    let onclick = Callback::from(move |_: MouseEvent| onselect.emit(bet));

    html! {
        <div class={classes!("bet", active.then_some("active"))}>
            <button class="bet-amount" {onclick}>{bet.amount()}</button>
            <img class="chips" src="images/gfx-casino-chips.svg" alt=""/>
        </div>
    }
}

#[derive(Properties, Clone, PartialEq)]
struct GameOverProps {
    on_new_game: Callback<MouseEvent>,
}

#[function_component(GameOverModal)]
fn game_over_modal(props: &GameOverProps) -> Html {
    html! {
        <dialog class="game-over" open={true}>
            <header>{"GAME OVER"}</header>
            <img src={symbol_image(Symbol::Seven)} alt=""/>
            <p>{"Bad luck. You lost all your coins."}<br/>{"Let's play again!"}</p>
            <button onclick={props.on_new_game.clone()}>{"NEW GAME"}</button>
        </dialog>
    }
}

pub(crate) struct GameView {
    machine: Machine,
    spins: u32,
    info_open: bool,
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        let seed = ctx.props().seed.unwrap_or_else(browser_seed);
        log::debug!("reel seed: {}", seed);

        Self {
            machine: slot::SlotMachine::new(
                slot::RandomReelSource::new(seed),
                WebPresenter::default(),
                LocalStorageStore,
            ),
            spins: 0,
            info_open: false,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        log::trace!("msg: {:?}", msg);
        match msg {
            Spin => match self.machine.play_round() {
                Ok(outcome) => {
                    self.spins = self.spins.wrapping_add(1);
                    log::debug!("round {}: {:?}", self.spins, outcome);
                    true
                }
                Err(err) => {
                    log::warn!("spin ignored: {}", err);
                    false
                }
            },
            SelectBet(bet) => {
                let changed = !self.machine.state().is_bet_active(bet);
                self.machine.select_bet(bet);
                changed
            }
            Reset => {
                self.machine.reset();
                true
            }
            NewGame => {
                self.machine.new_game();
                true
            }
            ToggleInfo => {
                self.info_open = !self.info_open;
                if self.info_open {
                    self.machine.presenter_mut().play(Sound::BackgroundMusic);
                } else {
                    self.machine.presenter_mut().stop();
                }
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        use Msg::*;

        let state = self.machine.state();
        let game_over = state.is_game_over();
        let link = ctx.link();

        let cb_spin = link.callback(|_: MouseEvent| Spin);
        let cb_reset = link.callback(|_: MouseEvent| Reset);
        let cb_info = link.callback(|_: MouseEvent| ToggleInfo);
        let cb_new_game = link.callback(|e: MouseEvent| {
            e.stop_propagation();
            NewGame
        });
        let cb_bet = link.callback(SelectBet);

        html! {
            <>
                <div class={classes!("slot-machine", game_over.then_some("blurred"))}>
                    <button class="reset" title="Reset" onclick={cb_reset}>{"⟲"}</button>
                    <button class="about" title="Info" onclick={cb_info.clone()}>{"ⓘ"}</button>
                    <header class="logo"><img src="images/gfx-slot-machine.svg" alt="Slot Machine"/></header>
                    <nav class="scores">
                        <ScoreBox label="Your Coins" value={state.coins()}/>
                        <ScoreBox label="High Score" value={state.high_score()} trailing={true}/>
                    </nav>
                    // keyed by spin count so every round replays the rise animation
                    <section class="reels" key={self.spins.to_string()}>
                        {
                            for state.reels().symbols().into_iter().enumerate().map(|(reel, symbol)| html! {
                                <ReelView {reel} {symbol}/>
                            })
                        }
                    </section>
                    <button class="spin" onclick={cb_spin} disabled={game_over}>
                        <img src="images/gfx-spin.svg" alt="Spin"/>
                    </button>
                    <footer class="bets">
                        {
                            for Bet::ALL.iter().rev().map(|&bet| html! {
                                <BetCapsule {bet} active={state.is_bet_active(bet)} onselect={cb_bet.clone()}/>
                            })
                        }
                    </footer>
                </div>
                if game_over {
                    <Overlay><GameOverModal on_new_game={cb_new_game}/></Overlay>
                }
                if self.info_open {
                    <Overlay><InfoView on_close={cb_info}/></Overlay>
                }
            </>
        }
    }

    fn rendered(&mut self, _ctx: &Context<Self>, first_render: bool) {
        if first_render {
            self.machine.presenter_mut().play(Sound::ReelRise);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbol_images_follow_asset_names() {
        assert_eq!(symbol_image(Symbol::Seven), "images/gfx-seven.svg");
        assert_eq!(symbol_image(Symbol::Strawberry), "images/gfx-strawberry.svg");
    }

    #[test]
    #[cfg(not(target_arch = "wasm32"))]
    fn every_image_ships_with_the_app() {
        let root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"));
        let images = Symbol::ALL.into_iter().map(symbol_image).chain(
            [
                "images/gfx-casino-chips.svg",
                "images/gfx-slot-machine.svg",
                "images/gfx-spin.svg",
            ]
            .map(String::from),
        );

        for image in images {
            assert!(root.join(&image).is_file(), "missing {}", image);
        }
    }

    #[test]
    fn seed_comes_from_location_hash_args() {
        use clap::Parser;

        #[derive(Parser)]
        struct HashArgs {
            #[command(flatten)]
            game: GameProps,
        }

        let args = HashArgs::try_parse_from("#--seed=42".split(['#', '&'])).unwrap();
        assert_eq!(args.game.seed, Some(42));

        let args = HashArgs::try_parse_from("".split(['#', '&'])).unwrap();
        assert_eq!(args.game.seed, None);
    }
}
