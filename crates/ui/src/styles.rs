//! CSS styles for the UI

/// Complete offline CSS styles
pub const CUSTOM_STYLES: &str = r#"
    /* Reset & Base */
    * {
        margin: 0;
        padding: 0;
        box-sizing: border-box;
    }

    html, body {
        font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
        background: #121212;
        color: #E1E1E1;
        height: 100%;
        overflow: hidden;
        user-select: none;
    }

    /* Main Container */
    .main-container {
        height: 100vh;
        display: flex;
        flex-direction: column;
        outline: none;
        animation: fade-in 0.4s ease-out;
    }

    @keyframes fade-in {
        from { opacity: 0; }
        to { opacity: 1; }
    }

    /* Title Bar */
    .title-bar {
        display: flex;
        justify-content: space-between;
        align-items: center;
        height: 40px;
        background: #121212;
        border-bottom: 1px solid rgba(187, 134, 252, 0.15);
        flex-shrink: 0;
    }
    .title-bar-drag {
        flex: 1;
        height: 100%;
        display: flex;
        align-items: center;
        gap: 6px;
        padding-left: 14px;
        cursor: move;
    }
    .title-icon {
        color: #BB86FC;
        font-size: 14px;
    }
    .title-text {
        font-size: 12px;
        font-weight: 600;
        letter-spacing: 1px;
        color: #E1E1E1;
    }
    .title-bar-buttons {
        display: flex;
        height: 100%;
    }
    .title-btn {
        width: 44px;
        height: 100%;
        border: none;
        background: transparent;
        color: #B0B0B0;
        font-size: 12px;
        cursor: pointer;
        transition: all 0.15s;
    }
    .title-btn:hover {
        background: rgba(255, 255, 255, 0.08);
        color: white;
    }
    .title-btn-close:hover {
        background: #B00020;
        color: white;
    }

    /* Panel */
    .panel {
        flex: 1;
        display: flex;
        flex-direction: column;
        padding: 10px 30px 20px 30px;
    }

    /* Status Area */
    .status-area {
        display: flex;
        align-items: center;
        justify-content: center;
        gap: 8px;
        padding: 12px 0;
    }
    .status-dot {
        width: 10px;
        height: 10px;
        border-radius: 50%;
        background: #444444;
    }
    .status-dot-running {
        background: #00E676;
        animation: status-pulse 1.6s ease-in-out infinite;
    }
    @keyframes status-pulse {
        0%   { background: #006400; box-shadow: 0 0 0 rgba(0, 230, 118, 0); }
        50%  { background: #00FF00; box-shadow: 0 0 8px rgba(0, 230, 118, 0.7); }
        100% { background: #006400; box-shadow: 0 0 0 rgba(0, 230, 118, 0); }
    }
    .status-text {
        font-size: 12px;
        font-weight: 600;
        letter-spacing: 1px;
        color: #B0B0B0;
    }
    .status-text-running {
        color: #E1E1E1;
    }

    /* Presence line */
    .presence-line {
        display: flex;
        align-items: center;
        justify-content: center;
        gap: 10px;
        padding-bottom: 8px;
        font-size: 11px;
    }
    .presence-ok {
        color: #00E676;
    }
    .presence-pending {
        color: #B0B0B0;
    }

    /* Input Area */
    .input-container {
        position: relative;
        padding: 14px 0;
    }
    .input-label {
        display: block;
        font-size: 11px;
        color: #BB86FC;
        margin-bottom: 4px;
    }
    .target-input {
        width: 100%;
        padding: 10px 12px;
        font-size: 16px;
        font-family: inherit;
        color: white;
        background: #1E1E1E;
        border: none;
        border-bottom: 2px solid #BB86FC;
        outline: none;
    }
    .target-input:disabled {
        background: #121212;
        color: #00E676;
    }

    /* History Popup */
    .history-popup {
        position: absolute;
        top: 100%;
        left: 0;
        right: 0;
        z-index: 20;
        background: #252525;
        border: 1px solid #BB86FC;
        display: flex;
        flex-direction: column;
    }
    .history-item {
        padding: 8px 12px;
        font-size: 13px;
        font-family: inherit;
        text-align: left;
        color: #E1E1E1;
        background: transparent;
        border: none;
        cursor: pointer;
    }
    .history-item:hover {
        background: #BB86FC;
        color: white;
    }

    /* Action Buttons */
    .action-area {
        display: flex;
        flex-direction: column;
        align-items: center;
        gap: 10px;
        padding: 16px 0;
    }
    .btn {
        width: 220px;
        height: 45px;
        border: none;
        font-size: 12px;
        font-weight: 700;
        font-family: inherit;
        letter-spacing: 1px;
        cursor: pointer;
        transition: background 0.2s ease;
    }
    .btn:disabled {
        background: #333333;
        color: #555555;
        cursor: default;
    }
    .btn-launch {
        background: #00E676;
        color: black;
    }
    .btn-launch:hover:not(:disabled) {
        background: #00C853;
    }
    .btn-stop {
        background: #CF6679;
        color: black;
    }
    .btn-stop:hover:not(:disabled) {
        background: #B00020;
        color: white;
    }
    .btn-small {
        padding: 3px 10px;
        font-size: 11px;
        font-family: inherit;
        color: white;
        background: #2979FF;
        border: none;
        cursor: pointer;
        transition: background 0.2s ease;
    }
    .btn-small:hover {
        background: #0055FF;
    }

    /* Transient status message */
    .status-message {
        text-align: center;
        padding: 6px 10px;
        font-size: 12px;
        color: #03DAC6;
    }

    /* Footer */
    .footer {
        margin-top: auto;
        text-align: center;
        font-size: 10px;
        color: #555555;
        padding-top: 10px;
    }

    /* About Modal */
    .about-modal-overlay {
        position: fixed;
        inset: 0;
        z-index: 50;
        background: rgba(0, 0, 0, 0.6);
        display: flex;
        align-items: center;
        justify-content: center;
    }
    .about-modal {
        width: 360px;
        background: #1E1E1E;
        border: 1px solid rgba(187, 134, 252, 0.4);
        display: flex;
        flex-direction: column;
        padding-bottom: 14px;
    }
    .about-modal-header {
        display: flex;
        justify-content: space-between;
        align-items: center;
        padding: 10px 14px;
        border-bottom: 1px solid rgba(187, 134, 252, 0.2);
    }
    .about-modal-title {
        font-size: 14px;
        color: #BB86FC;
    }
    .about-modal-close {
        border: none;
        background: transparent;
        color: #B0B0B0;
        font-size: 14px;
        cursor: pointer;
    }
    .about-modal-close:hover {
        color: #CF6679;
    }
    .about-link {
        color: #2979FF;
        text-decoration: none;
    }
    .about-link:hover {
        text-decoration: underline;
    }

    /* Dummy window */
    .dummy-container {
        height: 100vh;
        display: flex;
        flex-direction: column;
        align-items: center;
        justify-content: center;
        gap: 4px;
        background: #121212;
    }
    .dummy-text {
        font-size: 13px;
        color: #03DAC6;
    }
    .dummy-name {
        font-size: 11px;
        color: #B0B0B0;
    }
"#;
