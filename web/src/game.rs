use memento_core::{BoardSize, Coord, Coord2, GameController, TimerEvent, TimerHandle, Timings};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::host::{CellView, WebHost};

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    StartPreset(Coord),
    StartCustom,
    CardClicked(Coord2),
    Timer(TimerHandle, TimerEvent),
}

#[derive(Properties, Clone, Copy, PartialEq)]
pub(crate) struct GameProps {
    pub seed: u64,
    pub timings: Timings,
}

pub(crate) struct GameView {
    controller: GameController<WebHost>,
    rows_input: NodeRef,
    cols_input: NodeRef,
}

impl GameView {
    const DEFAULT_SIDE: &'static str = "4";

    fn input_value(node: &NodeRef) -> String {
        node.cast::<HtmlInputElement>()
            .map(|input| input.value())
            .unwrap_or_default()
    }

    fn view_cell(&self, ctx: &Context<Self>, cell: &CellView) -> Html {
        let (row, col) = cell.coords;
        let onclick = cell.clickable.then(|| {
            let coords = cell.coords;
            ctx.link().callback(move |_: MouseEvent| Msg::CardClicked(coords))
        });
        let label = cell.label.map(String::from).unwrap_or_default();

        html! {
            <div
                key={format!("{}-{}", row, col)}
                class="card"
                data-row={row.to_string()}
                data-col={col.to_string()}
                style={cell.style()}
                {onclick}
            >
                {label}
            </div>
        }
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        let GameProps { seed, timings } = *ctx.props();
        let host = WebHost::new(ctx.link().clone());
        Self {
            controller: GameController::with_timings(host, seed, timings),
            rows_input: NodeRef::default(),
            cols_input: NodeRef::default(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            StartPreset(side) => {
                if let Some(size) = self.controller.start_preset(side) {
                    log::debug!("preset {}", size);
                }
            }
            StartCustom => {
                let rows = Self::input_value(&self.rows_input);
                let cols = Self::input_value(&self.cols_input);
                match self.controller.start_custom(&rows, &cols) {
                    Ok(size) => log::debug!("custom {}", size),
                    Err(err) => log::debug!("custom size refused: {:?}", err),
                }
            }
            CardClicked(coords) => {
                log::trace!("card clicked: {:?}", coords);
                self.controller.on_card_click(coords);
            }
            Timer(handle, event) => self.controller.on_timer(handle, event),
        }
        self.controller.host_mut().take_dirty()
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        use Msg::*;

        let board = self.controller.host().board();
        let grid_style = format!("grid-template-columns: repeat({}, 1fr)", board.cols());
        let cb_custom = ctx.link().callback(|_: MouseEvent| StartCustom);

        html! {
            <div class="memento">
                <nav class="sizes">
                    {
                        for BoardSize::PRESETS.into_iter().map(|size| {
                            let side = size.rows();
                            let onclick = ctx.link().callback(move |_: MouseEvent| StartPreset(side));
                            html! {
                                <button class="size-btn" data-size={side.to_string()} {onclick}>
                                    {size.to_string()}
                                </button>
                            }
                        })
                    }
                </nav>
                <div class="custom-size">
                    <label>
                        {"Rows"}
                        <input ref={self.rows_input.clone()} id="rows" type="number" min="2" max="10" value={Self::DEFAULT_SIDE}/>
                    </label>
                    <label>
                        {"Columns"}
                        <input ref={self.cols_input.clone()} id="cols" type="number" min="2" max="10" value={Self::DEFAULT_SIDE}/>
                    </label>
                    <button id="custom-size-btn" onclick={cb_custom}>{"Start"}</button>
                </div>
                <div class="stats">
                    <span>{"Attempts: "}<span id="attempts">{board.attempts().to_string()}</span></span>
                    <span>{"Time: "}<span id="time">{board.time()}</span></span>
                </div>
                <div id="grid" class="grid" style={grid_style}>
                    { for board.cells().iter().map(|cell| self.view_cell(ctx, cell)) }
                </div>
            </div>
        }
    }
}
