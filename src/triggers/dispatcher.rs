//! Trigger dispatch.
//!
//! `Arena::fire` runs every handler a unit has bound to an event kind.
//!
//! ## Iteration
//!
//! Bindings are walked by index, and the unit (with its binding list) is
//! re-read from the arena before every step. A handler that rewrites the
//! list (a parrot copying abilities) changes what the rest of the walk sees.
//! Once the unit has left the arena the last seen copy is used, which is how
//! faint handlers and knock-outs by fainted attackers still run.
//!
//! ## Amplifier
//!
//! In battle, after each handler of an amplifiable kind, a tiger directly
//! behind the unit re-runs the same handler once at the tiger's level.
//! "Directly behind" is `index - 1`; for faint events it is the slot behind
//! the pre-removal index.

use tracing::trace;

use crate::battle::Arena;
use crate::core::Side;
use crate::units::{Species, Unit};

use super::event::{EventArgs, EventKind};
use super::registry::{Activation, Handler};

impl Arena<'_> {
    /// Run every handler `unit` has bound to `kind`.
    ///
    /// # Panics
    ///
    /// Panics if `args` does not have `kind`'s shape.
    pub fn fire(&mut self, side: Side, unit: &Unit, kind: EventKind, args: &EventArgs) {
        assert_eq!(
            args.shape(),
            kind.shape(),
            "{kind:?} fired with {:?} arguments",
            args.shape()
        );

        let mut current = unit.clone();
        let mut step = 0;

        loop {
            if let Some(live) = self.unit(side, current.id) {
                current = live.clone();
            }
            let Some(&binding) = current.bindings.get(step) else {
                break;
            };
            step += 1;

            if binding.kind != kind {
                continue;
            }
            let Some(handler) = self.registry.resolve(binding) else {
                trace!(?binding, "binding has no handler");
                continue;
            };

            let activation = Activation {
                side,
                level: current.level(),
                unit: current.clone(),
                amplified: false,
            };
            trace!(species = %current.species, ?kind, %side, "ability");
            self.invoke(handler, &activation, args);

            if let Some(level) = self.amplifier_level(side, &current, kind, args) {
                let amplified = Activation {
                    side,
                    level,
                    unit: self.unit(side, current.id).cloned().unwrap_or_else(|| current.clone()),
                    amplified: true,
                };
                trace!(species = %current.species, ?kind, level, "amplified");
                self.invoke(handler, &amplified, args);
            }
        }
    }

    /// Level of a tiger directly behind `unit`, if this event is amplified.
    fn amplifier_level(
        &self,
        side: Side,
        unit: &Unit,
        kind: EventKind,
        args: &EventArgs,
    ) -> Option<u8> {
        if !self.is_battle() || !kind.is_amplifiable() {
            return None;
        }

        let index = match args.faint_index() {
            Some(index) if kind == EventKind::Faint => index,
            _ => self.position(side, unit.id)?,
        };
        let behind = self.units(side).get(index.checked_sub(1)?)?;

        (behind.species == Species::Tiger).then(|| behind.level())
    }

    fn invoke(&mut self, handler: Handler, activation: &Activation, args: &EventArgs) {
        match (handler, args) {
            (Handler::Shop(f), EventArgs::Shop(shop)) => f(self, activation, shop),
            (Handler::EndTurn(f), EventArgs::EndTurn(last)) => f(self, activation, *last),
            (Handler::Combat(f), EventArgs::Combat) => f(self, activation),
            (Handler::Faint(f), EventArgs::Faint(faint)) => f(self, activation, faint),
            (Handler::Summon(f), EventArgs::Summon(summon)) => f(self, activation, summon),
            (handler, args) => unreachable!(
                "registry admitted a {:?} handler for {:?} arguments",
                handler.shape(),
                args.shape()
            ),
        }
    }
}
