//! Calculator app with immediate-execution arithmetic.

mod engine;

use desktop_app_contract::AppMountContext;
use leptos::ev::KeyboardEvent;
use leptos::*;

use crate::engine::{keyboard_action, BinaryOp, CalcAction, CalculatorState};

#[derive(Clone, Copy)]
enum KeyStyle {
    Function,
    Operator,
    Digit,
}

impl KeyStyle {
    fn class(self) -> &'static str {
        match self {
            Self::Function => "calc-key calc-key-function",
            Self::Operator => "calc-key calc-key-operator",
            Self::Digit => "calc-key calc-key-digit",
        }
    }
}

struct CalcKeySpec {
    label: &'static str,
    action: CalcAction,
    style: KeyStyle,
    wide: bool,
}

const fn key(label: &'static str, action: CalcAction, style: KeyStyle) -> CalcKeySpec {
    CalcKeySpec {
        label,
        action,
        style,
        wide: false,
    }
}

static KEYPAD: [CalcKeySpec; 19] = [
    key("AC", CalcAction::ClearAll, KeyStyle::Function),
    key("+/-", CalcAction::ToggleSign, KeyStyle::Function),
    key("%", CalcAction::Percent, KeyStyle::Function),
    key("÷", CalcAction::Binary(BinaryOp::Divide), KeyStyle::Operator),
    key("7", CalcAction::Digit('7'), KeyStyle::Digit),
    key("8", CalcAction::Digit('8'), KeyStyle::Digit),
    key("9", CalcAction::Digit('9'), KeyStyle::Digit),
    key("×", CalcAction::Binary(BinaryOp::Multiply), KeyStyle::Operator),
    key("4", CalcAction::Digit('4'), KeyStyle::Digit),
    key("5", CalcAction::Digit('5'), KeyStyle::Digit),
    key("6", CalcAction::Digit('6'), KeyStyle::Digit),
    key("-", CalcAction::Binary(BinaryOp::Subtract), KeyStyle::Operator),
    key("1", CalcAction::Digit('1'), KeyStyle::Digit),
    key("2", CalcAction::Digit('2'), KeyStyle::Digit),
    key("3", CalcAction::Digit('3'), KeyStyle::Digit),
    key("+", CalcAction::Binary(BinaryOp::Add), KeyStyle::Operator),
    CalcKeySpec {
        label: "0",
        action: CalcAction::Digit('0'),
        style: KeyStyle::Digit,
        wide: true,
    },
    key(".", CalcAction::Decimal, KeyStyle::Digit),
    key("=", CalcAction::Equals, KeyStyle::Operator),
];

#[component]
/// Calculator window contents.
pub fn CalculatorApp(context: AppMountContext) -> impl IntoView {
    let lifecycle = context.lifecycle;
    let calc = create_rw_signal(CalculatorState::default());

    let on_keydown = move |ev: KeyboardEvent| {
        if ev.ctrl_key() || ev.meta_key() || ev.alt_key() {
            return;
        }

        if let Some(action) = keyboard_action(&ev.key()) {
            ev.prevent_default();
            calc.update(|state| state.apply(action));
        }
    };

    view! {
        <div
            class="app-shell app-calculator-shell"
            tabindex="0"
            data-lifecycle=move || lifecycle.get().token()
            on:keydown=on_keydown
        >
            <div class="calc-display" aria-live="polite">
                <span class="calc-display-value">{move || calc.with(CalculatorState::display_text)}</span>
            </div>
            <div class="calc-keypad" role="group" aria-label="Calculator keypad">
                {KEYPAD
                    .iter()
                    .map(|spec| {
                        let action = spec.action;
                        let active = move || match action {
                            CalcAction::Binary(op) => calc.with(|state| state.pending_op() == Some(op)),
                            _ => false,
                        };
                        view! {
                            <button
                                type="button"
                                class=spec.style.class()
                                class:wide=spec.wide
                                class:active=active
                                on:click=move |_| calc.update(|state| state.apply(action))
                            >
                                {spec.label}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
