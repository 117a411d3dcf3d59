// ============================================================================
// APP STATE - Estado global de la aplicación (Rc<RefCell> + subscribers)
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::state::view_state::{Action, ViewState};

#[derive(Clone, Default)]
pub struct AppState {
    view: Rc<RefCell<ViewState>>,
    change_subscribers: Rc<RefCell<Vec<Rc<dyn Fn()>>>>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copia del estado actual
    pub fn snapshot(&self) -> ViewState {
        self.view.borrow().clone()
    }

    /// Lectura sin clonar
    pub fn with<R>(&self, f: impl FnOnce(&ViewState) -> R) -> R {
        f(&self.view.borrow())
    }

    /// Aplica una acción y notifica si cambia lo que se ve
    pub fn dispatch(&self, action: Action) {
        let notify = action.triggers_render();
        log::debug!("🔁 [STATE] {:?}", action);
        {
            let mut view = self.view.borrow_mut();
            let current = std::mem::take(&mut *view);
            *view = current.apply(action);
        }
        if notify {
            self.notify_subscribers();
        }
    }

    /// Suscribirse a cambios de estado
    pub fn subscribe_to_changes<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.change_subscribers.borrow_mut().push(Rc::new(callback));
    }

    fn notify_subscribers(&self) {
        // Clonar la lista: un subscriber puede suscribir a otro durante la notificación
        let subscribers: Vec<_> = self.change_subscribers.borrow().iter().cloned().collect();
        for callback in subscribers {
            callback();
        }
    }
}
