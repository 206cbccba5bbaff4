//! WebAssembly entry points.
//!
//! Each function takes the JSON body a browser client posts
//! (`{capacity, items}` or `{matrix}`), runs the solver comparison, and
//! returns `{dp, bt, bnb, greedy}` or `{bt, bnb}` with a per-solver `time`
//! in milliseconds. A missing tour or assignment is reported as
//! `minCost: null`.

use serde::{Deserialize, Serialize};
use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::prelude::*;

use crate::assignment::{AssignmentResult, CostMatrix};
use crate::compare::{ComparisonConfig, ComparisonRunner, Timed};
use crate::error::SolveError;
use crate::knapsack::{Item, ItemSet, KnapsackResult};
use crate::tsp::{DistanceMatrix, TspResult};

#[derive(Deserialize)]
struct KnapsackRequest {
    capacity: u64,
    items: ItemSet,
}

#[derive(Deserialize)]
struct MatrixRequest<M> {
    matrix: M,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct KnapsackReply {
    max_value: u64,
    selected_items: Vec<Item>,
    time: String,
}

impl From<Timed<KnapsackResult>> for KnapsackReply {
    fn from(t: Timed<KnapsackResult>) -> Self {
        Self {
            time: format!("{:.3}", t.millis()),
            max_value: t.result.max_value,
            selected_items: t.result.selected_items,
        }
    }
}

#[derive(Serialize)]
struct KnapsackResponse {
    dp: KnapsackReply,
    bt: KnapsackReply,
    bnb: KnapsackReply,
    greedy: KnapsackReply,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TourReply {
    min_cost: Option<u64>,
    best_path: Vec<usize>,
    time: String,
}

impl From<Timed<TspResult>> for TourReply {
    fn from(t: Timed<TspResult>) -> Self {
        Self {
            time: format!("{:.3}", t.millis()),
            min_cost: t.result.min_cost(),
            best_path: t.result.best_path().to_vec(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AssignmentReply {
    min_cost: Option<u64>,
    best_assignment: Vec<String>,
    time: String,
}

impl From<Timed<AssignmentResult>> for AssignmentReply {
    fn from(t: Timed<AssignmentResult>) -> Self {
        Self {
            time: format!("{:.3}", t.millis()),
            min_cost: t.result.min_cost(),
            best_assignment: t
                .result
                .best_assignment()
                .iter()
                .map(ToString::to_string)
                .collect(),
        }
    }
}

#[derive(Serialize)]
struct PairResponse<T> {
    bt: T,
    bnb: T,
}

fn to_js(e: SolveError) -> JsValue {
    JsError::new(&e.to_string()).into()
}

/// Compares all knapsack solvers on `{capacity, items: [{id, value, weight}]}`.
#[wasm_bindgen(js_name = solveKnapsack)]
pub fn solve_knapsack(request: JsValue) -> Result<JsValue, JsValue> {
    let request: KnapsackRequest = from_value(request)?;
    let cmp = ComparisonRunner::knapsack(
        request.capacity,
        &request.items,
        &ComparisonConfig::default(),
    )
    .map_err(to_js)?;

    let response = KnapsackResponse {
        dp: cmp.dp.into(),
        bt: cmp.backtracking.into(),
        bnb: cmp.branch_and_bound.into(),
        greedy: cmp.greedy.into(),
    };
    Ok(to_value(&response)?)
}

/// Compares both TSP solvers on `{matrix}`.
#[wasm_bindgen(js_name = solveTsp)]
pub fn solve_tsp(request: JsValue) -> Result<JsValue, JsValue> {
    let request: MatrixRequest<DistanceMatrix> = from_value(request)?;
    let cmp = ComparisonRunner::tsp(&request.matrix, &ComparisonConfig::default()).map_err(to_js)?;

    let response = PairResponse::<TourReply> {
        bt: cmp.backtracking.into(),
        bnb: cmp.branch_and_bound.into(),
    };
    Ok(to_value(&response)?)
}

/// Compares both assignment solvers on `{matrix}`.
#[wasm_bindgen(js_name = solveAssignment)]
pub fn solve_assignment(request: JsValue) -> Result<JsValue, JsValue> {
    let request: MatrixRequest<CostMatrix> = from_value(request)?;
    let cmp = ComparisonRunner::assignment(&request.matrix, &ComparisonConfig::default())
        .map_err(to_js)?;

    let response = PairResponse::<AssignmentReply> {
        bt: cmp.backtracking.into(),
        bnb: cmp.branch_and_bound.into(),
    };
    Ok(to_value(&response)?)
}
