const MAX_ENTRY_DIGITS: usize = 16;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl BinaryOp {
    pub(crate) fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "−",
            Self::Multiply => "×",
            Self::Divide => "÷",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum CalcAction {
    Digit(char),
    Decimal,
    ClearAll,
    ToggleSign,
    Percent,
    Binary(BinaryOp),
    Equals,
}

/// Immediate-execution calculator: each operator applies the pending one before it.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct CalculatorState {
    entry: String,
    accumulator: Option<f64>,
    pending_op: Option<BinaryOp>,
    replace_entry: bool,
    error: Option<&'static str>,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self {
            entry: "0".to_string(),
            accumulator: None,
            pending_op: None,
            replace_entry: false,
            error: None,
        }
    }
}

impl CalculatorState {
    pub(crate) fn apply(&mut self, action: CalcAction) {
        match action {
            CalcAction::Digit(digit) => self.input_digit(digit),
            CalcAction::Decimal => self.input_decimal(),
            CalcAction::ClearAll => *self = Self::default(),
            CalcAction::ToggleSign => self.toggle_sign(),
            CalcAction::Percent => self.percent(),
            CalcAction::Binary(op) => self.set_pending_operation(op),
            CalcAction::Equals => self.equals(),
        }
    }

    pub(crate) fn display_text(&self) -> String {
        self.error
            .map(str::to_string)
            .unwrap_or_else(|| self.entry.clone())
    }

    pub(crate) fn pending_op(&self) -> Option<BinaryOp> {
        self.pending_op
    }

    fn current_value(&self) -> Option<f64> {
        if self.error.is_some() {
            return None;
        }
        self.entry.parse::<f64>().ok()
    }

    fn start_fresh_entry(&mut self) {
        if self.error.is_some() {
            *self = Self::default();
        }
        if self.replace_entry {
            self.entry = "0".to_string();
            self.replace_entry = false;
        }
    }

    fn input_digit(&mut self, digit: char) {
        self.start_fresh_entry();

        let digits = self.entry.chars().filter(|c| c.is_ascii_digit()).count();
        if digits >= MAX_ENTRY_DIGITS {
            return;
        }

        match self.entry.as_str() {
            "0" => self.entry = digit.to_string(),
            "-0" => self.entry = format!("-{digit}"),
            _ => self.entry.push(digit),
        }
    }

    fn input_decimal(&mut self) {
        self.start_fresh_entry();
        if !self.entry.contains('.') {
            self.entry.push('.');
        }
    }

    fn toggle_sign(&mut self) {
        let Some(value) = self.current_value() else {
            return;
        };
        if value == 0.0 {
            return;
        }
        if let Some(stripped) = self.entry.strip_prefix('-') {
            self.entry = stripped.to_string();
        } else {
            self.entry.insert(0, '-');
        }
    }

    fn percent(&mut self) {
        if let Some(value) = self.current_value() {
            self.entry = format_number(value / 100.0);
            self.replace_entry = true;
        }
    }

    fn set_pending_operation(&mut self, op: BinaryOp) {
        let Some(current) = self.current_value() else {
            return;
        };

        let base = match (self.accumulator, self.pending_op) {
            // Pressing a second operator before typing swaps the operator.
            (Some(acc), Some(_)) if self.replace_entry => acc,
            (Some(acc), Some(pending)) => match apply_binary(acc, pending, current) {
                Ok(value) => value,
                Err(message) => {
                    self.set_error(message);
                    return;
                }
            },
            _ => current,
        };

        self.accumulator = Some(base);
        self.pending_op = Some(op);
        self.entry = format_number(base);
        self.replace_entry = true;
    }

    fn equals(&mut self) {
        let (Some(acc), Some(op)) = (self.accumulator, self.pending_op) else {
            return;
        };
        let Some(rhs) = self.current_value() else {
            return;
        };
        match apply_binary(acc, op, rhs) {
            Ok(result) => {
                self.entry = format_number(result);
                self.accumulator = None;
                self.pending_op = None;
                self.replace_entry = true;
            }
            Err(message) => self.set_error(message),
        }
    }

    fn set_error(&mut self, message: &'static str) {
        self.error = Some(message);
        self.entry = "0".to_string();
        self.accumulator = None;
        self.pending_op = None;
        self.replace_entry = true;
    }
}

pub(crate) fn keyboard_action(key: &str) -> Option<CalcAction> {
    match key {
        digit @ ("0" | "1" | "2" | "3" | "4" | "5" | "6" | "7" | "8" | "9") => {
            digit.chars().next().map(CalcAction::Digit)
        }
        "." | "," => Some(CalcAction::Decimal),
        "+" => Some(CalcAction::Binary(BinaryOp::Add)),
        "-" => Some(CalcAction::Binary(BinaryOp::Subtract)),
        "*" | "x" | "X" => Some(CalcAction::Binary(BinaryOp::Multiply)),
        "/" => Some(CalcAction::Binary(BinaryOp::Divide)),
        "%" => Some(CalcAction::Percent),
        "=" | "Enter" => Some(CalcAction::Equals),
        "Escape" | "Delete" => Some(CalcAction::ClearAll),
        "F9" => Some(CalcAction::ToggleSign),
        _ => None,
    }
}

fn apply_binary(lhs: f64, op: BinaryOp, rhs: f64) -> Result<f64, &'static str> {
    let result = match op {
        BinaryOp::Add => lhs + rhs,
        BinaryOp::Subtract => lhs - rhs,
        BinaryOp::Multiply => lhs * rhs,
        BinaryOp::Divide => {
            if rhs == 0.0 {
                return Err("Cannot divide by zero");
            }
            lhs / rhs
        }
    };

    if result.is_finite() {
        Ok(result)
    } else {
        Err("Overflow")
    }
}

pub(crate) fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }

    if value.fract() == 0.0 && value.abs() < 1e15 {
        return format!("{value:.0}");
    }

    let mut text = format!("{value:.12}");
    while text.contains('.') && text.ends_with('0') {
        text.pop();
    }
    if text.ends_with('.') {
        text.pop();
    }
    text
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn press(state: &mut CalculatorState, keys: &str) {
        for key in keys.split_whitespace() {
            let action = keyboard_action(key)
                .or_else(|| (key == "±").then_some(CalcAction::ToggleSign))
                .unwrap_or_else(|| panic!("unsupported test key: {key}"));
            state.apply(action);
        }
    }

    fn run(keys: &str) -> String {
        let mut state = CalculatorState::default();
        press(&mut state, keys);
        state.display_text()
    }

    #[test]
    fn digits_replace_leading_zero_and_cap_length() {
        assert_eq!(run("0 0 7"), "7");
        assert_eq!(run("1 . . 5"), "1.5");

        let mut state = CalculatorState::default();
        for _ in 0..(MAX_ENTRY_DIGITS + 4) {
            state.apply(CalcAction::Digit('9'));
        }
        assert_eq!(state.display_text().len(), MAX_ENTRY_DIGITS);
    }

    #[test]
    fn operators_execute_immediately_left_to_right() {
        assert_eq!(run("2 + 3 * 4 ="), "20");
        assert_eq!(run("9 - 4 -"), "5");
        assert_eq!(run("1 0 / 4 ="), "2.5");
    }

    #[test]
    fn second_operator_replaces_the_first() {
        let mut state = CalculatorState::default();
        press(&mut state, "8 + *");
        assert_eq!(state.pending_op(), Some(BinaryOp::Multiply));
        press(&mut state, "3 =");
        assert_eq!(state.display_text(), "24");
    }

    #[test]
    fn decimal_after_operator_starts_new_entry() {
        assert_eq!(run("3 + . 5 ="), "3.5");
    }

    #[test]
    fn toggle_sign_and_percent_rewrite_the_entry() {
        assert_eq!(run("4 2 ±"), "-42");
        assert_eq!(run("4 2 ± ±"), "42");
        assert_eq!(run("0 ±"), "0");
        assert_eq!(run("5 0 %"), "0.5");
    }

    #[test]
    fn equals_without_pending_operation_keeps_display() {
        assert_eq!(run("7 ="), "7");
    }

    #[test]
    fn digit_after_equals_starts_fresh() {
        assert_eq!(run("2 + 2 = 5"), "5");
        assert_eq!(run("2 + 2 = + 1 ="), "5");
    }

    #[test]
    fn division_by_zero_shows_error_until_next_input() {
        let mut state = CalculatorState::default();
        press(&mut state, "1 / 0 =");
        assert_eq!(state.display_text(), "Cannot divide by zero");

        press(&mut state, "+");
        assert_eq!(state.display_text(), "Cannot divide by zero");

        press(&mut state, "6");
        assert_eq!(state.display_text(), "6");
        assert_eq!(state.pending_op(), None);
    }

    #[test]
    fn clear_all_resets_everything() {
        let mut state = CalculatorState::default();
        press(&mut state, "1 2 + 3 Escape");
        assert_eq!(state, CalculatorState::default());
    }

    #[test]
    fn format_number_trims_trailing_zeros() {
        assert_eq!(format_number(0.1 + 0.2), "0.3");
        assert_eq!(format_number(-12.0), "-12");
        assert_eq!(format_number(-0.0), "0");
    }
}
