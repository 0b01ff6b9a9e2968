use bjtable::{
    Card, CommentCategory, DealerHand, DealerStep, GameEvent, GameSession, Gesture, Hand,
    HandOutcome, HistoryEntry, Phase, RoundResult, Seat, Statistics, Suit, TableOptions,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmTable {
    session: GameSession,
}

#[wasm_bindgen]
impl WasmTable {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32) -> Result<WasmTable, JsValue> {
        let session = GameSession::new(TableOptions::default(), seed as u64).map_err(js_err)?;
        Ok(Self { session })
    }

    pub fn reset(&mut self) {
        self.session.reset();
    }

    pub fn place_bet(&mut self, amount: u32) -> Result<(), JsValue> {
        self.session.place_bet(amount).map_err(js_err)
    }

    pub fn hit(&mut self) -> Result<JsValue, JsValue> {
        let card = self.session.hit().map_err(js_err)?;
        to_js_value(&card_to_js(card))
    }

    pub fn stand(&mut self) -> Result<(), JsValue> {
        self.session.stand().map_err(js_err)
    }

    /// Runs one dealer decision so the page can pace the reveal.
    pub fn dealer_step(&mut self) -> Result<JsValue, JsValue> {
        let step = self.session.dealer_step().map_err(js_err)?;
        to_js_value(&JsDealerStep::from(step))
    }

    pub fn continue_round(&mut self) -> Result<(), JsValue> {
        self.session.continue_round().map_err(js_err)
    }

    pub fn drain_events(&mut self) -> Result<JsValue, JsValue> {
        let events: Vec<JsEvent> = self.session.drain_events().map(JsEvent::from).collect();
        to_js_value(&events)
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        let session = &self.session;

        let snapshot = Snapshot {
            phase: phase_to_str(session.phase()),
            chips: session.chips(),
            bet: session.bet(),
            player: session.player_hand().map(JsHand::from),
            dealer: session.dealer_hand().map(JsDealer::from),
            stats: JsStats::from(session.statistics()),
            history: session
                .recent_history()
                .iter()
                .copied()
                .map(JsHistoryEntry::from)
                .collect(),
            last_result: session.last_result().copied().map(JsRoundResult::from),
            cards_remaining: session.cards_remaining() as u32,
        };

        to_js_value(&snapshot)
    }
}

#[derive(Serialize)]
struct Snapshot {
    phase: &'static str,
    chips: u32,
    bet: Option<u32>,
    player: Option<JsHand>,
    dealer: Option<JsDealer>,
    stats: JsStats,
    history: Vec<JsHistoryEntry>,
    last_result: Option<JsRoundResult>,
    cards_remaining: u32,
}

#[derive(Serialize)]
struct JsCard {
    suit: &'static str,
    rank: u8,
}

#[derive(Serialize)]
struct JsHand {
    cards: Vec<JsCard>,
    value: u16,
    is_soft: bool,
}

impl From<&Hand> for JsHand {
    fn from(hand: &Hand) -> Self {
        Self {
            cards: hand.cards().iter().copied().map(card_to_js).collect(),
            value: hand.value(),
            is_soft: hand.is_soft(),
        }
    }
}

#[derive(Serialize)]
struct JsDealer {
    cards: Vec<Option<JsCard>>,
    visible_value: u16,
    hole_revealed: bool,
}

impl From<&DealerHand> for JsDealer {
    fn from(dealer: &DealerHand) -> Self {
        let cards = dealer
            .cards()
            .iter()
            .enumerate()
            .map(|(index, card)| (!dealer.is_concealed(index)).then(|| card_to_js(*card)))
            .collect();

        Self {
            cards,
            visible_value: dealer.visible_value(),
            hole_revealed: dealer.is_hole_revealed(),
        }
    }
}

#[derive(Serialize)]
struct JsStats {
    games_played: u32,
    wins: u32,
    losses: u32,
    ties: u32,
    win_rate: f64,
}

impl From<&Statistics> for JsStats {
    fn from(stats: &Statistics) -> Self {
        Self {
            games_played: stats.games_played,
            wins: stats.wins,
            losses: stats.losses,
            ties: stats.ties,
            win_rate: stats.win_rate(),
        }
    }
}

#[derive(Serialize)]
struct JsHistoryEntry {
    bet: u32,
    outcome: &'static str,
    net: i32,
    player_value: u16,
    dealer_value: u16,
}

impl From<HistoryEntry> for JsHistoryEntry {
    fn from(entry: HistoryEntry) -> Self {
        Self {
            bet: entry.bet,
            outcome: outcome_to_str(entry.outcome),
            net: entry.net as i32,
            player_value: entry.player_value,
            dealer_value: entry.dealer_value,
        }
    }
}

#[derive(Serialize)]
struct JsRoundResult {
    outcome: &'static str,
    bet: u32,
    net: i32,
    player_value: u16,
    dealer_value: u16,
    chips: u32,
}

impl From<RoundResult> for JsRoundResult {
    fn from(result: RoundResult) -> Self {
        Self {
            outcome: outcome_to_str(result.outcome),
            bet: result.bet,
            net: result.net as i32,
            player_value: result.player_value,
            dealer_value: result.dealer_value,
            chips: result.chips,
        }
    }
}

#[derive(Serialize)]
#[serde(tag = "step", rename_all = "camelCase")]
enum JsDealerStep {
    Drew { card: JsCard },
    Settled { result: JsRoundResult },
}

impl From<DealerStep> for JsDealerStep {
    fn from(step: DealerStep) -> Self {
        match step {
            DealerStep::Drew(card) => Self::Drew {
                card: card_to_js(card),
            },
            DealerStep::Settled(result) => Self::Settled {
                result: JsRoundResult::from(result),
            },
        }
    }
}

#[derive(Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
enum JsEvent {
    PhaseChanged {
        phase: &'static str,
    },
    BetPlaced {
        amount: u32,
    },
    Shuffling,
    CardDealt {
        seat: &'static str,
        card: Option<JsCard>,
    },
    ShoeReplenished,
    HoleCardRevealed {
        card: JsCard,
    },
    RoundSettled {
        outcome: &'static str,
        net: i32,
    },
    DealerComment {
        category: &'static str,
        text: &'static str,
    },
    DealerGreeting {
        text: &'static str,
    },
    DealerGesture {
        gesture: &'static str,
    },
    TableCleared,
    RoundAborted,
    GameOver,
    GameReset,
}

impl From<GameEvent> for JsEvent {
    fn from(event: GameEvent) -> Self {
        match event {
            GameEvent::PhaseChanged(phase) => Self::PhaseChanged {
                phase: phase_to_str(phase),
            },
            GameEvent::BetPlaced { amount } => Self::BetPlaced { amount },
            GameEvent::Shuffling => Self::Shuffling,
            GameEvent::CardDealt {
                seat,
                card,
                concealed,
            } => Self::CardDealt {
                seat: seat_to_str(seat),
                card: (!concealed).then(|| card_to_js(card)),
            },
            GameEvent::ShoeReplenished => Self::ShoeReplenished,
            GameEvent::HoleCardRevealed(card) => Self::HoleCardRevealed {
                card: card_to_js(card),
            },
            GameEvent::RoundSettled { outcome, net } => Self::RoundSettled {
                outcome: outcome_to_str(outcome),
                net: net as i32,
            },
            GameEvent::DealerComment { category, text } => Self::DealerComment {
                category: category_to_str(category),
                text,
            },
            GameEvent::DealerGreeting { text } => Self::DealerGreeting { text },
            GameEvent::DealerGesture(gesture) => Self::DealerGesture {
                gesture: gesture_to_str(gesture),
            },
            GameEvent::TableCleared => Self::TableCleared,
            GameEvent::RoundAborted => Self::RoundAborted,
            GameEvent::GameOver => Self::GameOver,
            GameEvent::GameReset => Self::GameReset,
        }
    }
}

fn card_to_js(card: Card) -> JsCard {
    JsCard {
        suit: suit_to_str(card.suit()),
        rank: card.rank(),
    }
}

fn suit_to_str(suit: Suit) -> &'static str {
    match suit {
        Suit::Spades => "Spades",
        Suit::Hearts => "Hearts",
        Suit::Diamonds => "Diamonds",
        Suit::Clubs => "Clubs",
    }
}

fn seat_to_str(seat: Seat) -> &'static str {
    match seat {
        Seat::Player => "Player",
        Seat::Dealer => "Dealer",
    }
}

fn phase_to_str(phase: Phase) -> &'static str {
    match phase {
        Phase::Idle => "Idle",
        Phase::Betting => "Betting",
        Phase::Dealing => "Dealing",
        Phase::PlayerTurn => "PlayerTurn",
        Phase::DealerTurn => "DealerTurn",
        Phase::Settled => "Settled",
        Phase::GameOver => "GameOver",
    }
}

fn outcome_to_str(outcome: HandOutcome) -> &'static str {
    match outcome {
        HandOutcome::Blackjack => "Blackjack",
        HandOutcome::Win => "Win",
        HandOutcome::DealerBust => "DealerBust",
        HandOutcome::Lose => "Lose",
        HandOutcome::Bust => "Bust",
        HandOutcome::Push => "Push",
    }
}

fn category_to_str(category: CommentCategory) -> &'static str {
    match category {
        CommentCategory::Welcome => "welcome",
        CommentCategory::Win => "win",
        CommentCategory::Lose => "lose",
        CommentCategory::Blackjack => "blackjack",
        CommentCategory::Bust => "bust",
        CommentCategory::Tie => "tie",
        CommentCategory::DealerBust => "dealerBust",
    }
}

fn gesture_to_str(gesture: Gesture) -> &'static str {
    match gesture {
        Gesture::Wave => "Wave",
        Gesture::Deal => "Deal",
    }
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
