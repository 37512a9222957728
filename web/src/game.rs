use crate::scheduler::GlooScheduler;
use crate::settings::{self, Settings};
use crate::utils::*;
use clap::Args;
use shape_memory_core as game;
use yew::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    Reveal(game::TileIndex),
    Timer(game::TimerEvent),
    SelectLevel(game::Level),
    NewGame,
}

const fn tile_class(view: game::TileView) -> &'static str {
    use game::TileView::*;
    match view {
        Hidden => "hidden",
        Revealed => "revealed",
        Wrong => "wrong",
        Correct => "correct",
    }
}

const fn result_text(result: game::RoundResult) -> &'static str {
    use game::RoundResult::*;
    match result {
        Won => "🎉 You Win!",
        TimedOut => "⏰ Time's Up!",
    }
}

const fn phase_class(phase: game::RoundPhase) -> &'static str {
    use game::RoundPhase::*;
    match phase {
        Preview => "preview",
        Active => "active",
        WonEnded => "win",
        TimedOutEnded => "lose",
    }
}

#[derive(Properties, Clone, PartialEq)]
struct TileProps {
    index: game::TileIndex,
    shape: game::Shape,
    view: game::TileView,
    callback: Callback<game::TileIndex>,
}

#[function_component(TileCell)]
fn tile_component(props: &TileProps) -> Html {
    let TileProps {
        index,
        shape,
        view,
        callback,
    } = props.clone();

    let onclick = Callback::from(move |_: MouseEvent| {
        log::trace!("tile {} clicked", index);
        callback.emit(index);
    });

    html! {
        <td class={classes!("tile", tile_class(view))} {onclick}>
            { if view.shows_shape() { shape.glyph() } else { "" } }
        </td>
    }
}

#[derive(Args, Properties, Debug, Clone, PartialEq)]
pub(crate) struct GameProps {
    /// Force a seed instead of random
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Start on this level instead of the stored one
    #[arg(short, long)]
    pub level: Option<game::Level>,
}

pub(crate) struct GameView {
    settings: Settings,
    controller: game::GameController<GlooScheduler>,
}

impl GameView {
    fn select_level(&mut self, level: game::Level) {
        if self.settings.level != level {
            self.settings.level = level;
            self.settings.local_save();
        }
        self.controller.start_round(Some(level));
    }

    fn view_board(&self, ctx: &Context<Self>) -> Html {
        let round = self.controller.round();
        let (rows, cols) = game::GRID_SIZE;
        let callback = ctx.link().callback(Msg::Reveal);

        html! {
            <table class={classes!("grid", phase_class(round.phase()))}>
                {
                    for (0..rows).map(|row| html! {
                        <tr>
                            {
                                for (0..cols).map(|col| {
                                    let index = row * cols + col;
                                    let shape = round.shape_at(index);
                                    let view = round.tile_view(index);
                                    let callback = callback.clone();
                                    html! {
                                        <TileCell {index} {shape} {view} {callback}/>
                                    }
                                })
                            }
                        </tr>
                    })
                }
            </table>
        }
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        let GameProps { seed, level } = ctx.props().clone();
        let mut settings: Settings = LocalOrDefault::local_or_default();
        if let Some(level) = level {
            settings.level = level;
        }
        let seed = seed.unwrap_or_else(js_random_seed);
        log::debug!("seed: {}, level: {}", seed, settings.level);

        let scheduler = GlooScheduler::new(ctx.link().clone());
        Self {
            controller: game::GameController::new(scheduler, seed, settings.level),
            settings,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            Reveal(index) => {
                let outcome = self.controller.reveal_tile(index);
                log::debug!("reveal tile {}: {:?}", index, outcome);
                outcome.has_update()
            }
            Timer(event) => self.controller.fire(event),
            SelectLevel(level) => {
                self.select_level(level);
                true
            }
            NewGame => {
                self.controller.start_round(None);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        use settings::LevelSelect;

        let snapshot = self.controller.snapshot();
        let onselect = ctx.link().callback(Msg::SelectLevel);
        let cb_new_game = ctx.link().callback(|_: MouseEvent| Msg::NewGame);

        html! {
            <div class="container">
                <h1>{"Shape Memory Game"}</h1>
                <LevelSelect level={self.settings.level} {onselect}/>
                <p class="prompt">{format!("Find all tiles with: {}", snapshot.target)}</p>
                <p class="timer">{format!("Time Left: {}s", snapshot.time_remaining)}</p>
                { self.view_board(ctx) }
                <p class="score">{format!("Score: {} / {}", snapshot.score, snapshot.target_count)}</p>
                {
                    for snapshot.result().map(|result| html! {
                        <div class="end-screen">
                            <p class="result-text">{result_text(result)}</p>
                            <button class="reset-button" onclick={cb_new_game.clone()}>{"Reset Game"}</button>
                        </div>
                    })
                }
            </div>
        }
    }
}
