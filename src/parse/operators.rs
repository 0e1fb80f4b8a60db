// Fri Feb 20 2026 - Alex

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::ast::OverloadedOperator;

/// Stable C-friendly tokens for overloaded operators. These spellings are
/// part of the output contract; downstream consumers key on them.
static OPERATOR_TOKENS: Lazy<HashMap<OverloadedOperator, &'static str>> = Lazy::new(|| {
    use OverloadedOperator::*;

    HashMap::from([
        (New, "__op_new"),
        (Delete, "__op_delete"),
        (ArrayNew, "__op_array_new"),
        (ArrayDelete, "__op_array_delete"),
        (Plus, "__op_plus"),
        (Minus, "__op_minus"),
        (Star, "__op_star"),
        (Slash, "__op_slash"),
        (Percent, "__op_percent"),
        (Caret, "__op_caret"),
        (Amp, "__op_amp"),
        (Pipe, "__op_pipe"),
        (Tilde, "__op_tilde"),
        (Exclaim, "__op_exclaim"),
        (Equal, "__op_eq"),
        (Less, "__op_lt"),
        (Greater, "__op_gt"),
        (PlusEqual, "__op_plus_equal"),
        (MinusEqual, "__op_minus_equal"),
        (StarEqual, "__op_star_equal"),
        (SlashEqual, "__op_slash_equal"),
        (PercentEqual, "__op_percent_equal"),
        (CaretEqual, "__op_caret_equal"),
        (AmpEqual, "__op_amp_equal"),
        (PipeEqual, "__op_pipe_equal"),
        (LessLess, "__op_lt_lt"),
        (GreaterGreater, "__op_gt_gt"),
        (LessLessEqual, "__op_lt_lt_eq"),
        (GreaterGreaterEqual, "__op_gt_gt_eq"),
        (EqualEqual, "__op_eq_eq"),
        (ExclaimEqual, "__op_exclaim_eq"),
        (LessEqual, "__op_leq"),
        (GreaterEqual, "__op_geq"),
        (Spaceship, "__op_spaceship"),
        (AmpAmp, "__op_amp_amp"),
        (PipePipe, "__op_pipe_pipe"),
        (PlusPlus, "__op_plus_plus"),
        (MinusMinus, "__op_minus_minus"),
        (Comma, "__op_comma"),
        (ArrowStar, "__op_arrow_star"),
        (Arrow, "__op_arrow"),
        (Call, "__op_call"),
        (Subscript, "__op_subscript"),
        (Conditional, "__op_conditional"),
        (Coawait, "__op_coawait"),
    ])
});

pub fn c_style_operator_name(op: OverloadedOperator) -> &'static str {
    OPERATOR_TOKENS.get(&op).copied().unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_operator_has_a_token() {
        use OverloadedOperator::*;
        let all = [
            New, Delete, ArrayNew, ArrayDelete, Plus, Minus, Star, Slash, Percent, Caret, Amp,
            Pipe, Tilde, Exclaim, Equal, Less, Greater, PlusEqual, MinusEqual, StarEqual,
            SlashEqual, PercentEqual, CaretEqual, AmpEqual, PipeEqual, LessLess, GreaterGreater,
            LessLessEqual, GreaterGreaterEqual, EqualEqual, ExclaimEqual, LessEqual, GreaterEqual,
            Spaceship, AmpAmp, PipePipe, PlusPlus, MinusMinus, Comma, ArrowStar, Arrow, Call,
            Subscript, Conditional, Coawait,
        ];

        let mut seen = std::collections::HashSet::new();
        for op in all {
            let token = c_style_operator_name(op);
            assert!(token.starts_with("__op_"), "bad token for {:?}", op);
            assert!(seen.insert(token), "duplicate token {}", token);
        }
    }

    #[test]
    fn test_gt_token_has_no_semicolon() {
        assert_eq!(c_style_operator_name(OverloadedOperator::Greater), "__op_gt");
    }
}
