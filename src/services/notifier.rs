/// Avisos bloqueantes al usuario (`window.alert` en el navegador)
pub trait Notifier {
    fn alert(&self, message: &str);
}

#[cfg(target_arch = "wasm32")]
#[derive(Clone, Default)]
pub struct BrowserNotifier;

#[cfg(target_arch = "wasm32")]
impl Notifier for BrowserNotifier {
    fn alert(&self, message: &str) {
        match web_sys::window() {
            Some(win) => {
                if win.alert_with_message(message).is_err() {
                    log::warn!("⚠️ [ALERT] No se pudo mostrar alerta: {}", message);
                }
            }
            None => log::warn!("⚠️ [ALERT] Sin window, alerta descartada: {}", message),
        }
    }
}
