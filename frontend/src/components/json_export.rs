//! Download and copy buttons for the export document.

use common::config::EXPORT_MIME_TYPE;
use gloo_timers::future::TimeoutFuture;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::config::COPIED_MILLIS;
use crate::helpers::{copy_to_clipboard, describe_js_error, download_text};

#[derive(Properties, PartialEq, Clone)]
pub struct JsonExportProps {
    /// The export document, already serialized.
    pub json: AttrValue,
    pub file_name: AttrValue,
    /// Show the copy-to-clipboard button next to the download button.
    #[prop_or(true)]
    pub show_copy: bool,
}

pub enum Msg {
    Download,
    Copy,
    Copied,
    ResetCopied,
}

pub struct JsonExport {
    copied: bool,
}

impl Component for JsonExport {
    type Message = Msg;
    type Properties = JsonExportProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self { copied: false }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        let props = ctx.props();
        match msg {
            Msg::Download => {
                if let Err(err) = download_text(&props.file_name, EXPORT_MIME_TYPE, &props.json) {
                    gloo_console::error!(format!("download failed: {}", describe_js_error(&err)));
                }
                false
            }
            Msg::Copy => {
                let json = props.json.clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    match copy_to_clipboard(&json).await {
                        Ok(()) => link.send_message(Msg::Copied),
                        Err(err) => {
                            gloo_console::error!(format!("copy failed: {}", describe_js_error(&err)))
                        }
                    }
                });
                false
            }
            Msg::Copied => {
                self.copied = true;
                let link = ctx.link().clone();
                spawn_local(async move {
                    TimeoutFuture::new(COPIED_MILLIS).await;
                    link.send_message(Msg::ResetCopied);
                });
                true
            }
            Msg::ResetCopied => {
                self.copied = false;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        html! {
            <>
                <button
                    class="btn-secondary"
                    title="Download JSON"
                    onclick={link.callback(|_| Msg::Download)}
                >
                    <i class="material-icons">{"download"}</i>
                    {"Export"}
                </button>
                {
                    if ctx.props().show_copy {
                        html! {
                            <button
                                class="btn-secondary"
                                title="Copy to clipboard"
                                onclick={link.callback(|_| Msg::Copy)}
                            >
                                <i class="material-icons">{ if self.copied { "check" } else { "content_copy" } }</i>
                            </button>
                        }
                    } else {
                        html! {}
                    }
                }
            </>
        }
    }
}
